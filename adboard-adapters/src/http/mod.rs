pub mod cookies;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use adboard_core::{AdvertStore, PasswordHasher, SessionStore, UserStore};

use crate::auth::jwt::JwtConfig;

/// Shared state handed to every route. Stores are behind `Arc`s so the
/// backing can be swapped (in-memory, Postgres) without touching the
/// handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub session_store: Arc<dyn SessionStore>,
    pub advert_store: Arc<dyn AdvertStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub jwt_config: JwtConfig,
}
