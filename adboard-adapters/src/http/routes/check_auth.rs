use adboard_application::{AuthStatus, CheckAuthUseCase};
use adboard_core::SessionId;
use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;

use crate::config::constants::SESSION_COOKIE_NAME;
use crate::http::AppState;

use super::{ApiError, AuthResponse};

/// Always answers 200; an absent or unrecognized cookie simply reads as
/// anonymous.
#[tracing::instrument(name = "CheckAuth", skip_all)]
pub async fn check_auth(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| SessionId::from(cookie.value().to_string()));

    let use_case = CheckAuthUseCase::new(&*state.session_store);
    let body = match use_case.execute(session_id).await? {
        AuthStatus::Authenticated { email, session_id } => {
            AuthResponse::authenticated(email.as_str().to_string(), session_id.to_string())
        }
        AuthStatus::Anonymous => AuthResponse::anonymous(),
    };

    Ok(Json(body))
}
