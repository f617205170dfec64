//! Health and version handlers

use axum::{extract::State, response::Json as ResponseJson};

use crate::state::SharedState;
use crate::types::{HealthResponse, VersionResponse};

/// GET /api/health - service liveness plus corpus size
pub async fn health(State(state): State<SharedState>) -> ResponseJson<HealthResponse> {
  let matcher = state.matcher().await;

  ResponseJson(HealthResponse {
    status: "healthy".to_string(),
    total_projects: matcher.total_projects(),
  })
}

/// GET /version - crate version
pub async fn version() -> ResponseJson<VersionResponse> {
  ResponseJson(VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() })
}
