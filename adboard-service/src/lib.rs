//! Router assembly for the adboard backend.
//!
//! The service nests the JSON API under `/api`, serves static assets as
//! the fallback, and wraps everything in request tracing and a panic
//! catcher so an unhandled fault surfaces as a plain 500.

mod tracing;

use adboard_adapters::http::{
    middleware::require_auth,
    routes::{
        check_auth, create_advert, delete_advert, get_advert, list_adverts, login, logout,
        signup, update_advert,
    },
    AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

pub struct AdboardService {
    router: Router,
}

impl AdboardService {
    pub fn new(state: AppState, assets_dir: String) -> Self {
        let assets_service =
            ServeDir::new(assets_dir.clone()).fallback(ServeFile::new(assets_dir + "/index.html"));

        // Mutating advert routes sit behind the auth gate; reads and the
        // auth endpoints themselves do not. `route_layer` only wraps the
        // methods registered before it, so the GET handlers stay open.
        let auth_gate = middleware::from_fn_with_state(state.clone(), require_auth);

        let api = Router::new()
            .route("/signup", post(signup))
            .route("/login", post(login))
            .route("/logout", post(logout))
            .route("/check-auth", get(check_auth))
            .route(
                "/adverts",
                post(create_advert)
                    .route_layer(auth_gate.clone())
                    .get(list_adverts),
            )
            .route(
                "/adverts/{id}",
                put(update_advert)
                    .delete(delete_advert)
                    .route_layer(auth_gate)
                    .get(get_advert),
            );

        let router = Router::new()
            .nest("/api", api)
            .fallback_service(assets_service)
            .with_state(state)
            .layer(CatchPanicLayer::new());

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        ::tracing::info!("adboard listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
