use adboard_core::SessionId;
use axum_extra::extract::cookie::Cookie;
use time::{Duration, OffsetDateTime};

use crate::config::constants::SESSION_COOKIE_NAME;

/// Builds the `session_id` cookie. `HttpOnly` keeps it away from page
/// scripts; `Secure`/`SameSite` are left to the deployment in front of
/// the service.
pub fn create_session_cookie(session_id: &SessionId, ttl_seconds: u64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session_id.to_string()))
        .path("/")
        .http_only(true)
        .expires(OffsetDateTime::now_utc() + Duration::seconds(ttl_seconds as i64))
        .build()
}

/// A cookie that instructs the client to drop its session cookie.
pub fn create_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .build();
    cookie.make_removal();
    cookie
}
