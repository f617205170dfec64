use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MatcherConfig;
use crate::error::{ProspectError, Result};
use crate::matcher::ProjectMatcher;
use crate::record::ProjectRecord;

/// Load project records from a JSON or YAML dataset file and resolve
/// their defaults. The engine accepts already-parsed records only;
/// spreadsheet/CSV conversion stays with the caller.
pub fn load_records(path: &Path) -> Result<Vec<ProjectRecord>> {
  let raw = fs::read_to_string(path)?;

  let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
  let mut records: Vec<ProjectRecord> = match extension.as_str() {
    "json" => serde_json::from_str(&raw)?,
    "yaml" | "yml" => serde_yaml::from_str(&raw)?,
    other => return Err(ProspectError::UnsupportedFormat(other.to_string())),
  };

  for (id, record) in records.iter_mut().enumerate() {
    record.resolve(id);
  }

  Ok(records)
}

/// Load a dataset and build a ready-to-query matcher in one step
pub fn load_matcher(path: &Path, config: MatcherConfig) -> Result<ProjectMatcher> {
  let records = load_records(path)?;
  ProjectMatcher::build(records, config)
}

/// Dataset location: PROSPECT_DATA env var when set, otherwise
/// projects.json in the working directory
pub fn default_data_path() -> PathBuf {
  if let Ok(custom) = std::env::var("PROSPECT_DATA") {
    return PathBuf::from(custom);
  }
  PathBuf::from("projects.json")
}
