//! Axum router configuration for all endpoints

use axum::{
  middleware as axum_middleware,
  routing::{get, post},
  Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{logs, similar, status};
use crate::middleware;
use crate::state::SharedState;

/// Create the application router over shared state
pub fn create_router(state: SharedState) -> Router {
  Router::new()
    // Query endpoints
    .route("/api/similar-projects", post(similar::similar_projects))
    .route("/api/reload", post(similar::reload))
    // Status endpoints
    .route("/api/health", get(status::health))
    .route("/version", get(status::version))
    // Logs endpoint
    .route("/logs", get(logs::get_logs))
    .layer(axum_middleware::from_fn_with_state(state.clone(), middleware::request_context))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
