use adboard_application::SignupUseCase;
use adboard_core::{Email, Password};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::http::{AppState, cookies::create_session_cookie};

use super::{ApiError, AuthResponse};

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = SignupUseCase::new(
        &*state.user_store,
        &*state.session_store,
        &*state.password_hasher,
    );
    let session = use_case.execute(email, password).await?;

    let cookie = create_session_cookie(&session.session_id, state.jwt_config.access_ttl_seconds);
    let body = AuthResponse::authenticated(
        session.email.as_str().to_string(),
        session.session_id.to_string(),
    );

    Ok((StatusCode::CREATED, jar.add(cookie), Json(body)))
}
