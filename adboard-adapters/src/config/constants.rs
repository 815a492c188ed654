pub mod env {
    pub const JWT_SECRET_KEY_ENV_VAR: &str = "JWT_SECRET_KEY";
    pub const JWT_EXPIRATION_TIME_ENV_VAR: &str = "JWT_EXPIRATION_TIME";
    pub const JWT_ISSUER_ENV_VAR: &str = "JWT_ISSUER";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const SESSION_COOKIE_NAME: &str = "session_id";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_JWT_EXPIRATION_SECONDS: u64 = 3600;
pub const DEFAULT_JWT_ISSUER: &str = "adboard";
