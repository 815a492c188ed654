pub mod auth;
pub mod config;
pub mod http;
pub mod persistence;

// Re-export the pieces a service binary wires together
pub use auth::{
    jwt::{Claims, JwtConfig, TokenAuthError},
    password_hash::Argon2PasswordHasher,
};
pub use config::settings::Settings;
pub use http::AppState;
pub use persistence::{
    hashmap_advert_store::HashMapAdvertStore, hashmap_session_store::HashMapSessionStore,
    hashmap_user_store::HashMapUserStore, postgres_user_store::PostgresUserStore,
};
