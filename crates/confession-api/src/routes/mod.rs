//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{confessions, fallback, health, reactions};
use crate::state::AppState;

/// Create the main router: both resources, health probes and the 404 fallback
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(confession_routes())
        .merge(health_routes())
        .fallback(fallback::not_found)
}

/// Resource routes. Each path answers OPTIONS with 200 and any method it
/// does not serve with 405. HEAD is refused explicitly since `get` would
/// otherwise answer it.
fn confession_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/confessions",
            get(confessions::list_confessions)
                .head(fallback::method_not_allowed)
                .post(confessions::create_confession)
                .options(fallback::preflight)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/reactions",
            post(reactions::add_reaction)
                .options(fallback::preflight)
                .fallback(fallback::method_not_allowed),
        )
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
