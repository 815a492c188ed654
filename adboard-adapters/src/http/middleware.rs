use adboard_core::{Email, SessionId, SessionStoreError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use http::{HeaderMap, header::AUTHORIZATION};

use crate::auth::jwt::validate_token;
use crate::config::constants::SESSION_COOKIE_NAME;

use super::AppState;
use super::routes::error::ApiError;

/// The subject of an authenticated request, inserted as a request
/// extension for downstream handlers.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub subject: Email,
}

/// Credential presented by a request, in precedence order: the session
/// cookie wins over a bearer token; a present-but-invalid cookie rejects
/// the request rather than falling through.
#[derive(Debug)]
pub enum Credential {
    Cookie(SessionId),
    Bearer(String),
    None,
}

pub fn extract_credential(headers: &HeaderMap) -> Credential {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        if !cookie.value().is_empty() {
            return Credential::Cookie(SessionId::from(cookie.value().to_string()));
        }
    }

    if let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        if !token.is_empty() {
            return Credential::Bearer(token.to_string());
        }
    }

    Credential::None
}

/// Gate for protected routes: a request proceeds only with a live
/// session cookie or a valid bearer token. Rejections short-circuit; no
/// downstream handler runs. The cookie's expiry is never refreshed here.
#[tracing::instrument(name = "Authenticating request", skip_all)]
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let subject = match extract_credential(request.headers()) {
        Credential::Cookie(session_id) => {
            match state.session_store.subject_of(&session_id).await {
                Ok(subject) => subject,
                Err(SessionStoreError::SessionNotFound) => {
                    return Err(ApiError::Unauthorized("invalid session".to_string()));
                }
                Err(e) => return Err(ApiError::UnexpectedError(e.to_string())),
            }
        }
        Credential::Bearer(token) => validate_token(&token, &state.jwt_config)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?,
        Credential::None => {
            return Err(ApiError::Unauthorized("missing credentials".to_string()));
        }
    };

    request.extensions_mut().insert(AuthContext { subject });
    Ok(next.run(request).await)
}
