//! Request and response bodies for the REST facade

use serde::{Deserialize, Serialize};

use crate::enrich::RegistryInfo;
use prospect::matcher::AnnotatedMatch;

/// Request for POST /api/similar-projects
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarProjectsRequest {
  /// Free-text project idea
  pub idea: String,

  /// Maximum number of matches to return
  #[serde(default = "default_limit")]
  pub limit: usize,

  /// Attach best-effort registry lookups (GitHub/NPM/PyPI) to matches
  #[serde(default)]
  pub enrich: bool,
}

pub fn default_limit() -> usize {
  5
}

/// One match, optionally carrying registry enrichment
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectMatchData {
  #[serde(flatten)]
  pub matched: AnnotatedMatch,

  /// External registry data; absent when enrichment was not requested
  /// or every lookup came back empty
  #[serde(skip_serializing_if = "Option::is_none")]
  pub registry: Option<RegistryInfo>,
}

impl From<AnnotatedMatch> for ProjectMatchData {
  fn from(matched: AnnotatedMatch) -> Self {
    Self { matched, registry: None }
  }
}

/// Response for POST /api/similar-projects
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarProjectsResponse {
  pub success: bool,
  pub matches: Vec<ProjectMatchData>,
  pub total_found: usize,
}

/// Response for GET /api/health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub total_projects: usize,
}

/// Response for GET /version
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
  pub version: String,
}

/// Response for POST /api/reload
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
  pub success: bool,
  pub total_projects: usize,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
}

impl ErrorResponse {
  pub fn new(message: impl Into<String>) -> Self {
    Self { error: message.into() }
  }
}

/// Query parameters for GET /logs
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
  pub limit: Option<usize>,
  pub level: Option<String>,
}

/// Response for GET /logs
#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
  pub logs: Vec<crier::service_logs::LogEntry>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_defaults() {
    let request: SimilarProjectsRequest =
      serde_json::from_str(r#"{"idea": "a chatbot"}"#).unwrap();
    assert_eq!(request.limit, 5);
    assert!(!request.enrich);
  }

  #[test]
  fn test_error_response_shape() {
    let body = serde_json::to_value(ErrorResponse::new("Please provide an idea")).unwrap();
    assert_eq!(body["error"], "Please provide an idea");
  }
}
