use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    advert::{Advert, AdvertChanges, NewAdvert},
    email::Email,
    session::SessionId,
    user::User,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Registers a new account and assigns its id. Implementations must
    /// perform the existence check and the insert inside one critical
    /// section so racing callers produce exactly one user.
    async fn add_user(
        &self,
        email: Email,
        password_hash: Secret<String>,
    ) -> Result<User, UserStoreError>;

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session not found")]
    SessionNotFound,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::SessionNotFound, Self::SessionNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Server-side session records. Removal is keyed by session id; the
/// subject email is a lookup attribute only.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn add_session(&self, subject: Email) -> Result<SessionId, SessionStoreError>;
    async fn session_exists(&self, session_id: &SessionId) -> Result<bool, SessionStoreError>;
    async fn remove_session(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;
    async fn subject_of(&self, session_id: &SessionId) -> Result<Email, SessionStoreError>;
}

// AdvertStore port trait and errors
#[derive(Debug, Error)]
pub enum AdvertStoreError {
    #[error("advert not found")]
    AdvertNotFound,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for AdvertStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AdvertNotFound, Self::AdvertNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AdvertStore: Send + Sync {
    async fn add_advert(&self, owner: Email, advert: NewAdvert)
    -> Result<Advert, AdvertStoreError>;
    async fn get_advert(&self, id: i64) -> Result<Advert, AdvertStoreError>;
    async fn list_adverts(&self) -> Result<Vec<Advert>, AdvertStoreError>;
    async fn update_advert(
        &self,
        id: i64,
        changes: AdvertChanges,
    ) -> Result<Advert, AdvertStoreError>;
    async fn remove_advert(&self, id: i64) -> Result<(), AdvertStoreError>;
}
