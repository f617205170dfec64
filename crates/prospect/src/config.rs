use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::vectorizer::VectorizerConfig;

/// Matcher configuration: vector space knobs plus query defaults.
/// Loaded from YAML; every field has a default so a partial (or
/// missing) file works.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
  #[serde(default)]
  pub vectorizer: VectorizerConfig,

  /// Default number of matches returned per query
  #[serde(default = "default_top_k")]
  pub top_k: usize,

  /// Raw cosine threshold below which matches count as noise
  #[serde(default = "default_min_score")]
  pub min_score: f32,
}

fn default_top_k() -> usize {
  5
}

fn default_min_score() -> f32 {
  0.01
}

impl Default for MatcherConfig {
  fn default() -> Self {
    Self {
      vectorizer: VectorizerConfig::default(),
      top_k: default_top_k(),
      min_score: default_min_score(),
    }
  }
}

impl MatcherConfig {
  /// Read a config file
  pub fn from_file(path: &Path) -> Result<Self> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
  }

  /// Load configuration: explicit path if given, otherwise the
  /// discovered default file, otherwise built-in defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    if let Some(path) = path {
      return Self::from_file(path);
    }

    match default_config_path() {
      Some(default) if default.exists() => Self::from_file(&default),
      _ => Ok(Self::default()),
    }
  }
}

/// Default config location (~/.prospect/config.yaml), overridable via
/// the PROSPECT_CONFIG env var for tests and unusual setups
pub fn default_config_path() -> Option<PathBuf> {
  if let Ok(custom) = std::env::var("PROSPECT_CONFIG") {
    return Some(PathBuf::from(custom));
  }

  dirs::home_dir().map(|home| home.join(".prospect").join("config.yaml"))
}
