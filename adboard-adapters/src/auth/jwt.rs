use adboard_core::Email;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use thiserror::Error;

/// Refresh tokens outlive access tokens by a fixed margin of seven days.
const REFRESH_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub access_ttl_seconds: u64,
    pub issuer: String,
}

impl JwtConfig {
    fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("token has expired")]
    Expired,
    #[error("unsupported signing algorithm")]
    BadAlgorithm,
    #[error("invalid token")]
    InvalidToken,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: Secret<String>,
    pub iss: String,
    pub iat: usize,
    pub nbf: usize,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 5)?;
        state.serialize_field("sub", &self.sub.expose_secret())?;
        state.serialize_field("iss", &self.iss)?;
        state.serialize_field("iat", &self.iat)?;
        state.serialize_field("nbf", &self.nbf)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}

/// Short-lived bearer token for API access.
pub fn generate_access_token(email: &Email, config: &JwtConfig) -> Result<String, TokenAuthError> {
    generate_token(email, config.access_ttl_seconds, config)
}

/// Long-lived token for re-issuing access tokens.
pub fn generate_refresh_token(email: &Email, config: &JwtConfig) -> Result<String, TokenAuthError> {
    generate_token(email, REFRESH_TTL_SECONDS, config)
}

fn generate_token(
    email: &Email,
    ttl_seconds: u64,
    config: &JwtConfig,
) -> Result<String, TokenAuthError> {
    let now = Utc::now().timestamp();
    let now: usize = now
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("clock before epoch".to_string()))?;

    let claims = Claims {
        sub: Secret::new(email.as_str().to_string()),
        iss: config.issuer.clone(),
        iat: now,
        nbf: now,
        exp: now + ttl_seconds as usize,
    };

    create_token(&claims, config.secret_bytes())
}

/// Validates signature, algorithm, expiry and not-before, in that order
/// of trust: only HMAC-SHA256 tokens signed with the process secret are
/// accepted, so an "alg":"none" header can never pass.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Email, TokenAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenAuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
        | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => TokenAuthError::BadAlgorithm,
        _ => TokenAuthError::InvalidToken,
    })?;

    Email::try_from(claims.sub.clone()).map_err(|_| TokenAuthError::InvalidToken)
}

fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenAuthError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenAuthError::UnexpectedError(e.to_string()))
}
