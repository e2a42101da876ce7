//! Router assembly

use axum::{routing::get, Router};

use crate::{
    books,
    health::{health, readiness},
    state::AppState,
};

/// All routes of the service, bound to `state`
///
/// Middleware is added by [`Server`](crate::server::Server).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .merge(books::router())
        .with_state(state)
}
