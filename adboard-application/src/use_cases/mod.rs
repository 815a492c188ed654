pub mod adverts;
pub mod check_auth;
pub mod login;
pub mod logout;
pub mod signup;

use adboard_core::{Email, SessionId};

/// Outcome of a successful signup or login: the subject and the session
/// bound to it.
#[derive(Debug)]
pub struct AuthenticatedSession {
    pub email: Email,
    pub session_id: SessionId,
}
