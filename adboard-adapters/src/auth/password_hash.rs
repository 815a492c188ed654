use adboard_core::{HashingError, PasswordHasher};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

/// Argon2id password hasher. Parameters target roughly a quarter second
/// per hash on commodity hardware; both directions run on the blocking
/// pool so the request loop is never stalled by hashing.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, cleartext: &Secret<String>) -> Result<Secret<String>, HashingError> {
        let cleartext = cleartext.clone();
        let current_span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut rand_core::OsRng);
                let hash = argon2()?
                    .hash_password(cleartext.expose_secret().as_bytes(), &salt)
                    .map_err(|e| e.to_string())?
                    .to_string();
                Ok::<_, String>(Secret::new(hash))
            })
        })
        .await
        .map_err(|e| HashingError::HashingFailed(e.to_string()))?;

        result.map_err(HashingError::HashingFailed)
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(&self, cleartext: &Secret<String>, stored_hash: &Secret<String>) -> bool {
        let cleartext = cleartext.clone();
        let stored_hash = stored_hash.clone();
        let current_span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = PasswordHash::new(stored_hash.expose_secret()).ok()?;
                let argon2 = argon2().ok()?;
                Some(
                    argon2
                        .verify_password(cleartext.expose_secret().as_bytes(), &parsed)
                        .is_ok(),
                )
            })
        })
        .await;

        // Malformed hashes and join failures both read as a mismatch.
        matches!(result, Ok(Some(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(raw: &str) -> Secret<String> {
        Secret::new(raw.to_string())
    }

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash(&secret("Valid1@Password")).await.unwrap();

        assert!(hasher.verify(&secret("Valid1@Password"), &hash).await);
        assert!(!hasher.verify(&secret("Valid1@Passwore"), &hash).await);
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash(&secret("Valid1@Password")).await.unwrap();
        let second = hasher.hash(&secret("Valid1@Password")).await.unwrap();
        assert_ne!(first.expose_secret(), second.expose_secret());
    }

    #[tokio::test]
    async fn empty_cleartext_still_hashes() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash(&secret("")).await.unwrap();
        assert!(hasher.verify(&secret(""), &hash).await);
        assert!(!hasher.verify(&secret("x"), &hash).await);
    }

    #[tokio::test]
    async fn malformed_stored_hash_verifies_false() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify(&secret("anything"), &secret("")).await);
        assert!(
            !hasher
                .verify(&secret("anything"), &secret("not-a-phc-string"))
                .await
        );
    }
}
