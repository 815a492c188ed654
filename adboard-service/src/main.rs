use std::sync::Arc;

use adboard_adapters::{
    AppState, Argon2PasswordHasher, HashMapAdvertStore, HashMapSessionStore, HashMapUserStore,
    PostgresUserStore, Settings,
    auth::jwt::JwtConfig,
    config::constants::env::DATABASE_URL_ENV_VAR,
};
use adboard_core::UserStore;
use color_eyre::eyre::Result;
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use adboard_service::AdboardService;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration; refuses to start without a JWT secret.
    let settings = Settings::load()?;

    let jwt_config = JwtConfig {
        secret: settings.jwt.secret_key.clone(),
        access_ttl_seconds: settings.jwt.expiration_time,
        issuer: settings.jwt.issuer.clone(),
    };

    // A DATABASE_URL switches the user store to its relational backing;
    // sessions and adverts stay in-process either way.
    let user_store: Arc<dyn UserStore> = match std::env::var(DATABASE_URL_ENV_VAR) {
        Ok(database_url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            Arc::new(PostgresUserStore::new(pg_pool))
        }
        Err(_) => Arc::new(HashMapUserStore::new()),
    };

    let state = AppState {
        user_store,
        session_store: Arc::new(HashMapSessionStore::new()),
        advert_store: Arc::new(HashMapAdvertStore::new()),
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        jwt_config,
    };

    let service = AdboardService::new(state, "assets".to_string());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.server.port)).await?;
    service.run(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
