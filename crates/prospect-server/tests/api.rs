use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crier::service_logs::ServiceLogs;
use prospect::config::MatcherConfig;
use prospect::loader;
use prospect_server::routing::create_router;
use prospect_server::state::{AppState, SharedState};

const SAMPLE_DATASET: &str = r#"[
  {
    "title": "SupportBot",
    "description": "AI chatbot for customer support using GPT models",
    "category": "AI"
  },
  {
    "title": "ChainTrack",
    "description": "Blockchain-based supply chain tracker",
    "category": "Blockchain"
  },
  {
    "title": "TicketTriage",
    "description": "Customer support ticketing system with AI triage",
    "category": "AI"
  }
]"#;

fn write_dataset(dir: &TempDir, content: &str) -> PathBuf {
  let path = dir.path().join("projects.json");
  fs::write(&path, content).unwrap();
  path
}

fn test_state(data_path: PathBuf) -> SharedState {
  let config = MatcherConfig::default();
  let matcher = loader::load_matcher(&data_path, config.clone()).unwrap();

  Arc::new(AppState::new(
    matcher,
    ServiceLogs::new_with_silent(64, true),
    reqwest::Client::new(),
    data_path,
    config,
  ))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

#[tokio::test]
async fn test_health_reports_corpus_size() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let response = router
    .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["status"], "healthy");
  assert_eq!(body["total_projects"], 3);
}

#[tokio::test]
async fn test_blank_idea_is_rejected_with_400() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let response = router
    .oneshot(post_json("/api/similar-projects", serde_json::json!({"idea": "   "})))
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert_eq!(body["error"], "Please provide an idea");
}

#[tokio::test]
async fn test_similar_projects_returns_ranked_matches() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let request = post_json(
    "/api/similar-projects",
    serde_json::json!({"idea": "AI assistant for handling customer service tickets", "limit": 5}),
  );
  let response = router.oneshot(request).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["success"], true);

  let matches = body["matches"].as_array().unwrap();
  assert_eq!(body["total_found"], matches.len() as u64);
  assert!(!matches.is_empty());

  let titles: Vec<&str> =
    matches.iter().map(|m| m["project"]["title"].as_str().unwrap()).collect();
  assert!(titles.contains(&"SupportBot"));
  assert!(titles.contains(&"TicketTriage"));

  // Scores are on the 0-100 display scale and descending
  let scores: Vec<f64> =
    matches.iter().map(|m| m["score_percent"].as_f64().unwrap()).collect();
  for pair in scores.windows(2) {
    assert!(pair[0] >= pair[1]);
  }
}

#[tokio::test]
async fn test_similar_projects_respects_limit() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let request =
    post_json("/api/similar-projects", serde_json::json!({"idea": "customer support", "limit": 1}));
  let response = router.oneshot(request).await.unwrap();

  let body = body_json(response).await;
  assert_eq!(body["matches"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unmatched_idea_is_success_with_zero_results() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let request = post_json(
    "/api/similar-projects",
    serde_json::json!({"idea": "zebra xylophone quasar"}),
  );
  let response = router.oneshot(request).await.unwrap();

  // "no results" is an expected outcome, distinct from any failure
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["success"], true);
  assert_eq!(body["total_found"], 0);
}

#[tokio::test]
async fn test_reload_swaps_in_the_new_corpus() {
  let dir = TempDir::new().unwrap();
  let data_path = write_dataset(&dir, SAMPLE_DATASET);
  let state = test_state(data_path.clone());
  let router = create_router(state.clone());

  // Replace the dataset on disk, then ask the server to reload
  fs::write(
    &data_path,
    r#"[{"title": "Farm", "description": "greenhouse irrigation controller"}]"#,
  )
  .unwrap();

  let response = router
    .clone()
    .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["total_projects"], 1);

  // Queries now see only the new corpus
  let request =
    post_json("/api/similar-projects", serde_json::json!({"idea": "customer support tickets"}));
  let response = router.clone().oneshot(request).await.unwrap();
  let body = body_json(response).await;
  assert_eq!(body["total_found"], 0);

  let request =
    post_json("/api/similar-projects", serde_json::json!({"idea": "greenhouse irrigation"}));
  let response = router.oneshot(request).await.unwrap();
  let body = body_json(response).await;
  assert_eq!(body["total_found"], 1);
  assert_eq!(body["matches"][0]["project"]["title"], "Farm");
}

#[tokio::test]
async fn test_failed_reload_returns_500_and_keeps_serving() {
  let dir = TempDir::new().unwrap();
  let data_path = write_dataset(&dir, SAMPLE_DATASET);
  let state = test_state(data_path.clone());
  let router = create_router(state);

  fs::write(&data_path, "{ broken json").unwrap();

  let response = router
    .clone()
    .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body = body_json(response).await;
  assert!(body["error"].as_str().unwrap().contains("Failed to reload"));

  // The previous corpus still answers queries
  let response = router
    .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
    .await
    .unwrap();
  let body = body_json(response).await;
  assert_eq!(body["total_projects"], 3);
}

#[tokio::test]
async fn test_version_endpoint() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  let response = router
    .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_logs_capture_requests() {
  let dir = TempDir::new().unwrap();
  let router = create_router(test_state(write_dataset(&dir, SAMPLE_DATASET)));

  // Generate one request worth of log entries, then read them back
  let _ = router
    .clone()
    .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
    .await
    .unwrap();

  let response = router
    .oneshot(Request::builder().uri("/logs?limit=10").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  let logs = body["logs"].as_array().unwrap();
  assert!(!logs.is_empty());
  assert!(logs.iter().any(|entry| entry["component"] == "http"));
}
