use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crier::service_logs::ServiceLogs;
use prospect::config::MatcherConfig;
use prospect::loader;
use prospect::matcher::ProjectMatcher;

/// Shared server state.
///
/// The matcher is read-only once built; queries clone the inner `Arc`
/// and work against a stable snapshot. A reload builds the replacement
/// matcher completely before swapping the pointer, so in-flight
/// queries finish against the corpus they started with and no partial
/// state is ever visible.
pub struct AppState {
  matcher: RwLock<Arc<ProjectMatcher>>,
  pub logs: ServiceLogs,
  pub http: reqwest::Client,
  pub data_path: PathBuf,
  pub config: MatcherConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
  pub fn new(
    matcher: ProjectMatcher,
    logs: ServiceLogs,
    http: reqwest::Client,
    data_path: PathBuf,
    config: MatcherConfig,
  ) -> Self {
    Self { matcher: RwLock::new(Arc::new(matcher)), logs, http, data_path, config }
  }

  /// Snapshot of the current matcher
  pub async fn matcher(&self) -> Arc<ProjectMatcher> {
    self.matcher.read().await.clone()
  }

  /// Rebuild the corpus from the data file and atomically swap it in.
  /// On any failure the previous matcher keeps serving.
  pub async fn reload(&self) -> prospect::Result<usize> {
    let next = loader::load_matcher(&self.data_path, self.config.clone())?;
    let total = next.total_projects();

    let mut guard = self.matcher.write().await;
    *guard = Arc::new(next);

    Ok(total)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use prospect::record::ProjectRecord;

  fn record(id: usize, title: &str, description: &str) -> ProjectRecord {
    let mut record = ProjectRecord {
      title: title.to_string(),
      description: description.to_string(),
      ..Default::default()
    };
    record.resolve(id);
    record
  }

  fn state_with(records: Vec<ProjectRecord>, data_path: PathBuf) -> AppState {
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();
    AppState::new(
      matcher,
      ServiceLogs::new_with_silent(16, true),
      reqwest::Client::new(),
      data_path,
      MatcherConfig::default(),
    )
  }

  #[tokio::test]
  async fn test_matcher_snapshot_is_stable_across_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_path = dir.path().join("projects.json");
    std::fs::write(&data_path, r#"[{"title": "New", "description": "replacement corpus"}]"#)
      .unwrap();

    let state = state_with(vec![record(0, "Old", "original corpus")], data_path);

    // A query holding the old snapshot keeps it through the swap
    let snapshot = state.matcher().await;
    let replaced = state.reload().await.unwrap();
    assert_eq!(replaced, 1);

    assert_eq!(snapshot.total_projects(), 1);
    assert_eq!(snapshot.corpus().record(0).unwrap().title, "Old");

    let current = state.matcher().await;
    assert_eq!(current.corpus().record(0).unwrap().title, "New");
  }

  #[tokio::test]
  async fn test_failed_reload_keeps_previous_matcher() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_path = dir.path().join("projects.json");
    std::fs::write(&data_path, "[]").unwrap();

    let state = state_with(vec![record(0, "Old", "original corpus")], data_path);

    let result = state.reload().await;
    assert!(result.is_err());

    let current = state.matcher().await;
    assert_eq!(current.corpus().record(0).unwrap().title, "Old");
  }
}
