use adboard_core::{SessionId, SessionStore, SessionStoreError};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("session does not exist")]
    SessionDoesNotExist,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

/// Logout use case - removes the server-side session record.
pub struct LogoutUseCase<'a> {
    session_store: &'a dyn SessionStore,
}

impl<'a> LogoutUseCase<'a> {
    pub fn new(session_store: &'a dyn SessionStore) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, session_id: SessionId) -> Result<(), LogoutError> {
        self.session_store
            .remove_session(&session_id)
            .await
            .map_err(|e| match e {
                SessionStoreError::SessionNotFound => LogoutError::SessionDoesNotExist,
                SessionStoreError::UnexpectedError(msg) => LogoutError::UnexpectedError(msg),
            })
    }
}
