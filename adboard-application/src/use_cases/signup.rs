use adboard_core::{
    Email, HashingError, Password, PasswordHasher, SessionStore, SessionStoreError, UserStore,
    UserStoreError,
};

use super::AuthenticatedSession;

/// Error types specific to the signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("{0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("{0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("{0}")]
    HashingError(#[from] HashingError),
}

/// Signup use case - registers an account and opens its first session.
pub struct SignupUseCase<'a> {
    user_store: &'a dyn UserStore,
    session_store: &'a dyn SessionStore,
    password_hasher: &'a dyn PasswordHasher,
}

impl<'a> SignupUseCase<'a> {
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

    /// Hashes the password, creates the user and opens a session.
    ///
    /// Duplicate emails surface as `UserStoreError::UserAlreadyExists`
    /// whether the account existed beforehand or a racing caller won the
    /// insert; the store's critical section guarantees a single winner.
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedSession, SignupError> {
        let password_hash = self.password_hasher.hash(password.as_ref()).await?;

        let user = self.user_store.add_user(email, password_hash).await?;

        let email = user.email().clone();
        let session_id = self.session_store.add_session(email.clone()).await?;

        Ok(AuthenticatedSession { email, session_id })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use adboard_core::{SessionId, User};
    use async_trait::async_trait;
    use secrecy::{ExposeSecret, Secret};
    use tokio::sync::RwLock;

    use super::*;

    #[derive(Clone, Default)]
    struct MockUserStore {
        users: Arc<RwLock<HashMap<Email, User>>>,
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn add_user(
            &self,
            email: Email,
            password_hash: Secret<String>,
        ) -> Result<User, UserStoreError> {
            let mut users = self.users.write().await;
            if users.contains_key(&email) {
                return Err(UserStoreError::UserAlreadyExists);
            }
            let user = User::new(users.len() as i64 + 1, email.clone(), password_hash);
            users.insert(email, user.clone());
            Ok(user)
        }

        async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
            self.users
                .read()
                .await
                .get(email)
                .cloned()
                .ok_or(UserStoreError::UserNotFound)
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

        async fn subject_of(&self, session_id: &SessionId) -> Result<Email, SessionStoreError> {
            self.sessions
                .read()
                .await
                .get(session_id)
                .cloned()
                .ok_or(SessionStoreError::SessionNotFound)
        }
    }

    struct MockPasswordHasher;

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
            stored_hash.expose_secret() == &format!("hashed:{}", cleartext.expose_secret())
        }
    }

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::new(raw.to_string())).unwrap()
    }

    fn password(raw: &str) -> Password {
        Password::try_from(Secret::new(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn signup_creates_user_and_session() {
        let user_store = MockUserStore::default();
        let session_store = MockSessionStore::default();
        let hasher = MockPasswordHasher;

        let use_case = SignupUseCase::new(&user_store, &session_store, &hasher);
        let result = use_case
            .execute(email("alice@example.com"), password("Valid1@Password"))
            .await
            .unwrap();

        assert_eq!(result.email, email("alice@example.com"));
        assert!(session_store.session_exists(&result.session_id).await.unwrap());
        assert_eq!(
            session_store.subject_of(&result.session_id).await.unwrap(),
            result.email
        );

        // The stored credential is the hash, not the cleartext.
        let user = user_store.get_user(&result.email).await.unwrap();
        assert_eq!(user.password_hash().expose_secret(), "hashed:Valid1@Password");
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let user_store = MockUserStore::default();
        let session_store = MockSessionStore::default();
        let hasher = MockPasswordHasher;

        let use_case = SignupUseCase::new(&user_store, &session_store, &hasher);
        use_case
            .execute(email("alice@example.com"), password("Valid1@Password"))
            .await
            .unwrap();

        let result = use_case
            .execute(email("alice@example.com"), password("Valid1@Password"))
            .await;
        assert!(matches!(
            result,
            Err(SignupError::UserStoreError(UserStoreError::UserAlreadyExists))
        ));
    }
}
