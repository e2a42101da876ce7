//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Number of books currently stored
    pub books: usize,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// The bookshelf has no external dependencies, so the service is ready as
/// soon as it can take the bookshelf lock.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.books().lock().await.len();

    let response = ReadinessResponse {
        ready: true,
        service: state.config().service.name.clone(),
        books,
    };

    (StatusCode::OK, Json(response))
}
