use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("failed to hash password: {0}")]
    HashingFailed(String),
}

/// One-way password hashing.
///
/// `hash` accepts any cleartext, the empty string included; complexity
/// policy belongs to the caller. `verify` is total: malformed stored
/// hashes yield `false`, never an error.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, cleartext: &Secret<String>) -> Result<Secret<String>, HashingError>;
    async fn verify(&self, cleartext: &Secret<String>, stored_hash: &Secret<String>) -> bool;
}
