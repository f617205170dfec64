//! Best-effort public registry lookups
//!
//! Enriches matches with live GitHub/NPM/PyPI metadata when asked to.
//! Every lookup is independent and timeout-bounded; any failure
//! degrades to "no data from this source" and never disturbs the
//! similarity ranking path.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::ProjectMatchData;
use prospect::matcher::AnnotatedMatch;

/// Registry metadata attached to a match
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RegistryInfo {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub github: Option<GithubRepo>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub npm: Option<NpmPackage>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub pypi: Option<PypiPackage>,
}

impl RegistryInfo {
  fn is_empty(&self) -> bool {
    self.github.is_none() && self.npm.is_none() && self.pypi.is_none()
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GithubRepo {
  pub full_name: String,
  #[serde(rename = "stargazers_count")]
  pub stars: u64,
  #[serde(rename = "forks_count")]
  pub forks: u64,
  pub language: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NpmPackage {
  pub name: String,
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PypiPackage {
  pub name: String,
  pub version: String,
  pub summary: Option<String>,
}

/// Look up registry data for every match concurrently
pub async fn enrich_matches(
  client: &reqwest::Client,
  matches: Vec<AnnotatedMatch>,
) -> Vec<ProjectMatchData> {
  let lookups = matches.into_iter().map(|matched| async move {
    let registry = lookup(client, &matched).await;
    ProjectMatchData { matched, registry: if registry.is_empty() { None } else { Some(registry) } }
  });

  join_all(lookups).await
}

async fn lookup(client: &reqwest::Client, matched: &AnnotatedMatch) -> RegistryInfo {
  let github = match matched.github_url.as_deref().and_then(owner_repo) {
    Some((owner, repo)) => github_repo(client, &owner, &repo).await,
    None => None,
  };

  // Package registries are keyed by name; a multi-word title is not a
  // package name, so skip the lookup rather than query garbage
  let package_name = package_like_name(&matched.project.title);
  let (npm, pypi) = match package_name {
    Some(name) => {
      (npm_package(client, &name).await, pypi_package(client, &name).await)
    }
    None => (None, None),
  };

  RegistryInfo { github, npm, pypi }
}

/// Extract (owner, repo) from a GitHub URL; None for anything odd
fn owner_repo(github_url: &str) -> Option<(String, String)> {
  let parsed = Url::parse(github_url).ok()?;
  if parsed.host_str() != Some("github.com") {
    return None;
  }

  let mut segments = parsed.path_segments()?;
  let owner = segments.next()?.to_string();
  let repo = segments.next()?.trim_end_matches(".git").to_string();
  if owner.is_empty() || repo.is_empty() {
    return None;
  }

  Some((owner, repo))
}

/// Single lowercase token usable as a registry package name
fn package_like_name(title: &str) -> Option<String> {
  let trimmed = title.trim();
  if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
    return None;
  }
  Some(trimmed.to_lowercase())
}

async fn github_repo(client: &reqwest::Client, owner: &str, repo: &str) -> Option<GithubRepo> {
  let url = format!("https://api.github.com/repos/{owner}/{repo}");
  let response = client.get(&url).send().await.ok()?;
  if !response.status().is_success() {
    return None;
  }
  response.json::<GithubRepo>().await.ok()
}

async fn npm_package(client: &reqwest::Client, name: &str) -> Option<NpmPackage> {
  #[derive(Deserialize)]
  struct SearchResponse {
    objects: Vec<SearchObject>,
  }
  #[derive(Deserialize)]
  struct SearchObject {
    package: NpmPackage,
  }

  let url = "https://registry.npmjs.org/-/v1/search";
  let response = client.get(url).query(&[("text", name), ("size", "1")]).send().await.ok()?;
  if !response.status().is_success() {
    return None;
  }

  let mut parsed = response.json::<SearchResponse>().await.ok()?;
  if parsed.objects.is_empty() {
    return None;
  }
  let found = parsed.objects.remove(0).package;

  // The search endpoint is fuzzy; only report exact name hits
  if found.name.eq_ignore_ascii_case(name) {
    Some(found)
  } else {
    None
  }
}

async fn pypi_package(client: &reqwest::Client, name: &str) -> Option<PypiPackage> {
  #[derive(Deserialize)]
  struct PypiResponse {
    info: PypiInfo,
  }
  #[derive(Deserialize)]
  struct PypiInfo {
    name: String,
    version: String,
    summary: Option<String>,
  }

  let url = format!("https://pypi.org/pypi/{name}/json");
  let response = client.get(&url).send().await.ok()?;
  if !response.status().is_success() {
    return None;
  }

  let parsed = response.json::<PypiResponse>().await.ok()?;
  Some(PypiPackage {
    name: parsed.info.name,
    version: parsed.info.version,
    summary: parsed.info.summary,
  })
}
