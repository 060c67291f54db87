//! HTTP API server

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/unregister",
            post(handlers::unregister),
        )
        .with_state(state)
}

/// Browser UI: `/` redirects to the index page served from `static_dir`
pub fn frontend_router(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
}

/// Full application: API, optional frontend, request tracing
pub fn create_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = create_router(state);

    if let Some(dir) = static_dir {
        router = router.merge(frontend_router(dir));
    }

    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
