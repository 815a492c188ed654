use adboard_application::{AdvertWriteError, LoginError, LogoutError, SignupError};
use adboard_core::{EmailError, PasswordError, SessionStoreError, UserStoreError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned on every failure path.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body")]
    InvalidRequestBody,

    #[error("{0}")]
    InvalidRequestData(String),

    #[error("{0}")]
    PasswordPolicyViolated(PasswordError),

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no active session")]
    NoActiveSession,

    #[error("session does not exist")]
    SessionDoesNotExist,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal server error")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidRequestBody
            | ApiError::InvalidRequestData(_)
            | ApiError::PasswordPolicyViolated(_)
            | ApiError::UserAlreadyExists => StatusCode::BAD_REQUEST,

            ApiError::InvalidCredentials
            | ApiError::NoActiveSession
            | ApiError::SessionDoesNotExist
            | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::UnexpectedError(detail) => {
                // The detail is logged, never leaked to the client.
                tracing::error!(detail = %detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            code: status_code.as_u16(),
            status: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        ApiError::InvalidRequestBody
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidRequestData(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::PasswordPolicyViolated(error)
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::UserStoreError(UserStoreError::UserAlreadyExists) => {
                ApiError::UserAlreadyExists
            }
            SignupError::UserStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            SignupError::SessionStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            SignupError::HashingError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::SessionStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionDoesNotExist => ApiError::SessionDoesNotExist,
            LogoutError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(error: SessionStoreError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<AdvertWriteError> for ApiError {
    fn from(error: AdvertWriteError) -> Self {
        match error {
            AdvertWriteError::NotFound => ApiError::NotFound("advert not found".to_string()),
            AdvertWriteError::NotOwner => {
                ApiError::Forbidden("advert belongs to another user".to_string())
            }
            AdvertWriteError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}
