use adboard_application::LogoutUseCase;
use adboard_core::SessionId;
use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;

use crate::config::constants::SESSION_COOKIE_NAME;
use crate::http::{AppState, cookies::create_removal_cookie};

use super::ApiError;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| SessionId::from(cookie.value().to_string()))
        .ok_or(ApiError::NoActiveSession)?;

    let use_case = LogoutUseCase::new(&*state.session_store);
    use_case.execute(session_id).await?;

    let jar = jar.add(create_removal_cookie());
    let body = Json(serde_json::json!({ "message": "Logged out successfully" }));

    Ok((jar, body))
}
