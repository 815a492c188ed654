pub mod adverts;
pub mod check_auth;
pub mod error;
pub mod login;
pub mod logout;
pub mod signup;

use serde::{Deserialize, Serialize};

pub use adverts::{create_advert, delete_advert, get_advert, list_adverts, update_advert};
pub use check_auth::check_auth;
pub use error::{ApiError, ErrorResponse};
pub use login::login;
pub use logout::logout;
pub use signup::signup;

/// Body of every successful auth endpoint. `session_id` is non-empty
/// exactly when `is_authenticated` is true.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub session_id: String,
    pub is_authenticated: bool,
}

impl AuthResponse {
    pub fn authenticated(email: String, session_id: String) -> Self {
        Self {
            email,
            session_id,
            is_authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            email: String::new(),
            session_id: String::new(),
            is_authenticated: false,
        }
    }
}
