use adboard_application::LoginUseCase;
use adboard_core::Email;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::http::{AppState, cookies::create_session_cookie};

use super::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Unknown account and wrong password are deliberately the same failure
/// here, with the same wording and the same hashing cost.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;

    let use_case = LoginUseCase::new(
        &*state.user_store,
        &*state.session_store,
        &*state.password_hasher,
    );
    let session = use_case.execute(email, request.password).await?;

    let cookie = create_session_cookie(&session.session_id, state.jwt_config.access_ttl_seconds);
    let body = AuthResponse::authenticated(
        session.email.as_str().to_string(),
        session.session_id.to_string(),
    );

    Ok((jar.add(cookie), Json(body)))
}
