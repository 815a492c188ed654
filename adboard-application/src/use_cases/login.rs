use adboard_core::{
    Email, PasswordHasher, SessionStore, SessionStoreError, UserStore, UserStoreError,
};
use secrecy::Secret;

use super::AuthenticatedSession;

/// Argon2 hash of no known password. Verified against when the account
/// does not exist so that a lookup miss costs the same as a wrong
/// password and the error cannot be told apart by timing.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=15000,t=2,p=1$c2Vzc2lvbnNhbHQwMQ$R8rrFFkDpm5dQ1hOJ8mPS2DrjMejTNDQT0Hf4KQJHWM";

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Covers both unknown accounts and wrong passwords; the two are
    /// indistinguishable at the boundary.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

/// Login use case - verifies credentials and opens a session.
pub struct LoginUseCase<'a> {
    user_store: &'a dyn UserStore,
    session_store: &'a dyn SessionStore,
    password_hasher: &'a dyn PasswordHasher,
}

impl<'a> LoginUseCase<'a> {
    pub fn new(
        user_store: &'a dyn UserStore,
        session_store: &'a dyn SessionStore,
        password_hasher: &'a dyn PasswordHasher,
    ) -> Self {
        Self {
            user_store,
            session_store,
            password_hasher,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Secret<String>,
    ) -> Result<AuthenticatedSession, LoginError> {
        let user = match self.user_store.get_user(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                // Burn the same hashing work as the happy path.
                let dummy = Secret::new(DUMMY_PASSWORD_HASH.to_string());
                let _ = self.password_hasher.verify(&password, &dummy).await;
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::UnexpectedError(e.to_string())),
        };

        if !self
            .password_hasher
            .verify(&password, user.password_hash())
            .await
        {
            return Err(LoginError::InvalidCredentials);
        }

        let session_id = self.session_store.add_session(email.clone()).await?;

        Ok(AuthenticatedSession { email, session_id })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use adboard_core::{HashingError, SessionId, User};
    use async_trait::async_trait;
    use secrecy::ExposeSecret;
    use tokio::sync::RwLock;

    use super::*;

    struct MockUserStore {
        user: Option<User>,
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn add_user(
            &self,
            _email: Email,
            _password_hash: Secret<String>,
        ) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
            match &self.user {
                Some(user) if user.email() == email => Ok(user.clone()),
                _ => Err(UserStoreError::UserNotFound),
            }
        }
    }

    #[derive(Clone, Default)]
    struct MockSessionStore {
        sessions: Arc<RwLock<HashMap<SessionId, Email>>>,
    }

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn add_session(&self, subject: Email) -> Result<SessionId, SessionStoreError> {
            let session_id = SessionId::generate();
            self.sessions
                .write()
                .await
                .insert(session_id.clone(), subject);
            Ok(session_id)
        }

        async fn session_exists(
            &self,
            session_id: &SessionId,
        ) -> Result<bool, SessionStoreError> {
            Ok(self.sessions.read().await.contains_key(session_id))
        }

        async fn remove_session(&self, _session_id: &SessionId) -> Result<(), SessionStoreError> {
            unimplemented!()
        }

        async fn subject_of(&self, _session_id: &SessionId) -> Result<Email, SessionStoreError> {
            unimplemented!()
        }
    }

    /// Counts verify calls so tests can assert the dummy verification runs.
    struct MockPasswordHasher {
        verify_calls: AtomicUsize,
    }

    impl MockPasswordHasher {
        fn new() -> Self {
            Self {
                verify_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash(&self, cleartext: &Secret<String>) -> Result<Secret<String>, HashingError> {
            Ok(Secret::new(format!("hashed:{}", cleartext.expose_secret())))
        }

        async fn verify(
            &self,
            cleartext: &Secret<String>,
            stored_hash: &Secret<String>,
        ) -> bool {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            stored_hash.expose_secret() == &format!("hashed:{}", cleartext.expose_secret())
        }
    }

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::new(raw.to_string())).unwrap()
    }

    fn stored_user(raw_email: &str, raw_password: &str) -> User {
        User::new(
            1,
            email(raw_email),
            Secret::new(format!("hashed:{raw_password}")),
        )
    }

    #[tokio::test]
    async fn login_with_correct_password_opens_session() {
        let user_store = MockUserStore {
            user: Some(stored_user("alice@example.com", "Valid1@Password")),
        };
        let session_store = MockSessionStore::default();
        let hasher = MockPasswordHasher::new();

        let use_case = LoginUseCase::new(&user_store, &session_store, &hasher);
        let result = use_case
            .execute(
                email("alice@example.com"),
                Secret::new("Valid1@Password".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(result.email, email("alice@example.com"));
        assert!(session_store.session_exists(&result.session_id).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_yields_invalid_credentials() {
        let user_store = MockUserStore {
            user: Some(stored_user("alice@example.com", "Valid1@Password")),
        };
        let session_store = MockSessionStore::default();
        let hasher = MockPasswordHasher::new();

        let use_case = LoginUseCase::new(&user_store, &session_store, &hasher);
        let result = use_case
            .execute(
                email("alice@example.com"),
                Secret::new("wrongpassword".to_string()),
            )
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_account_yields_the_same_error_and_still_verifies() {
        let user_store = MockUserStore { user: None };
        let session_store = MockSessionStore::default();
        let hasher = MockPasswordHasher::new();

        let use_case = LoginUseCase::new(&user_store, &session_store, &hasher);
        let result = use_case
            .execute(
                email("nobody@example.com"),
                Secret::new("whatever123".to_string()),
            )
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        // The dummy verification ran, so the miss costs a hash check too.
        assert_eq!(hasher.verify_calls.load(Ordering::SeqCst), 1);
    }
}
