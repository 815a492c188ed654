use adboard_core::{Email, SessionId, SessionStore, SessionStoreError};

/// Whether the presented cookie maps to a live session.
#[derive(Debug)]
pub enum AuthStatus {
    Authenticated { email: Email, session_id: SessionId },
    Anonymous,
}

/// Check-auth use case - reports authentication state without mutating it.
///
/// A cookie the store does not recognize is treated the same as no cookie
/// at all; the check only succeeds for sessions the store can vouch for.
pub struct CheckAuthUseCase<'a> {
    session_store: &'a dyn SessionStore,
}

impl<'a> CheckAuthUseCase<'a> {
    pub fn new(session_store: &'a dyn SessionStore) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "CheckAuthUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<AuthStatus, SessionStoreError> {
        let Some(session_id) = session_id else {
            return Ok(AuthStatus::Anonymous);
        };

        match self.session_store.subject_of(&session_id).await {
            Ok(email) => Ok(AuthStatus::Authenticated { email, session_id }),
            Err(SessionStoreError::SessionNotFound) => Ok(AuthStatus::Anonymous),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use secrecy::Secret;
    use tokio::sync::RwLock;

    use super::*;

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

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::new(raw.to_string())).unwrap()
    }

    #[tokio::test]
    async fn known_session_is_authenticated() {
        let store = MockSessionStore::default();
        let session_id = store.add_session(email("alice@example.com")).await.unwrap();

        let use_case = CheckAuthUseCase::new(&store);
        let status = use_case.execute(Some(session_id.clone())).await.unwrap();

        match status {
            AuthStatus::Authenticated {
                email: subject,
                session_id: returned,
            } => {
                assert_eq!(subject, email("alice@example.com"));
                assert_eq!(returned, session_id);
            }
            AuthStatus::Anonymous => panic!("expected an authenticated status"),
        }
    }

    #[tokio::test]
    async fn missing_cookie_is_anonymous() {
        let store = MockSessionStore::default();
        let use_case = CheckAuthUseCase::new(&store);

        let status = use_case.execute(None).await.unwrap();
        assert!(matches!(status, AuthStatus::Anonymous));
    }

    #[tokio::test]
    async fn unknown_cookie_is_anonymous() {
        let store = MockSessionStore::default();
        let use_case = CheckAuthUseCase::new(&store);

        let status = use_case.execute(Some(SessionId::generate())).await.unwrap();
        assert!(matches!(status, AuthStatus::Anonymous));
    }
}
