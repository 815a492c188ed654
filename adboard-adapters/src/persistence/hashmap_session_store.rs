use std::collections::HashMap;
use std::sync::Arc;

use adboard_core::{Email, SessionId, SessionStore, SessionStoreError};
use tokio::sync::RwLock;

/// In-memory session store: session id -> subject email.
///
/// Every operation takes a single guard for the whole map access, so
/// reads and writes serialize and the map is linearizable. Sessions live
/// until logout or process restart.
#[derive(Clone, Default)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Email>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    #[tracing::instrument(name = "Adding session", skip_all)]
    async fn add_session(&self, subject: Email) -> Result<SessionId, SessionStoreError> {
        let session_id = SessionId::generate();
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), subject);
        Ok(session_id)
    }

    async fn session_exists(&self, session_id: &SessionId) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.read().await.contains_key(session_id))
    }

    #[tracing::instrument(name = "Removing session", skip_all)]
    async fn remove_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| ())
            .ok_or(SessionStoreError::SessionNotFound)
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
