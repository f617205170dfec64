use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProspectError {
  #[error("cannot fit a vector space over an empty corpus")]
  EmptyCorpus,

  #[error("vectorization failed: {0}")]
  Vectorization(String),

  #[error("no project with id {0} in the corpus")]
  UnknownProject(usize),

  #[error("unsupported dataset format '{0}' (expected .json, .yaml or .yml)")]
  UnsupportedFormat(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON parse error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("YAML parse error: {0}")]
  Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ProspectError>;
