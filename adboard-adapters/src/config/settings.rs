use config::{Config, File, FileFormat};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{
    DEFAULT_JWT_EXPIRATION_SECONDS, DEFAULT_JWT_ISSUER, DEFAULT_PORT,
    env::{JWT_EXPIRATION_TIME_ENV_VAR, JWT_ISSUER_ENV_VAR, JWT_SECRET_KEY_ENV_VAR, PORT_ENV_VAR},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("JWT secret key must not be empty")]
    MissingJwtSecret,
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    pub secret_key: Secret<String>,
    /// Seconds; governs both token `exp` and the session cookie expiry.
    pub expiration_time: u64,
    pub issuer: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub jwt: JwtSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Loads `config.json` if present, then applies environment
    /// overrides. Fails when the JWT secret ends up empty; the service
    /// must not start without one.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("jwt.secret_key", "")?
            .set_default("jwt.expiration_time", DEFAULT_JWT_EXPIRATION_SECONDS as i64)?
            .set_default("jwt.issuer", DEFAULT_JWT_ISSUER)?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .add_source(File::new("config", FileFormat::Json).required(false))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;
        settings.apply_env_overrides()?;

        if settings.jwt.secret_key.expose_secret().is_empty() {
            return Err(SettingsError::MissingJwtSecret);
        }

        Ok(settings)
    }

    fn apply_env_overrides(&mut self) -> Result<(), SettingsError> {
        if let Ok(value) = std::env::var(JWT_SECRET_KEY_ENV_VAR) {
            self.jwt.secret_key = Secret::new(value);
        }
        if let Ok(value) = std::env::var(JWT_EXPIRATION_TIME_ENV_VAR) {
            self.jwt.expiration_time =
                value
                    .parse()
                    .map_err(|_| SettingsError::InvalidValue {
                        name: JWT_EXPIRATION_TIME_ENV_VAR,
                        value,
                    })?;
        }
        if let Ok(value) = std::env::var(JWT_ISSUER_ENV_VAR) {
            self.jwt.issuer = value;
        }
        if let Ok(value) = std::env::var(PORT_ENV_VAR) {
            self.server.port = value.parse().map_err(|_| SettingsError::InvalidValue {
                name: PORT_ENV_VAR,
                value,
            })?;
        }
        Ok(())
    }
}
