use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::annotate;

pub const UNKNOWN_TITLE: &str = "Unknown Project";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_SUBCATEGORY: &str = "General";

/// One row of the source project table.
///
/// All defaulting happens once, in [`ProjectRecord::resolve`], so the
/// matching pipeline never has to guess about missing fields. Unknown
/// columns are kept verbatim in `extra` and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectRecord {
  /// Stable identifier; assigned from load order by the loader
  #[serde(default)]
  pub id: usize,

  #[serde(default)]
  pub title: String,

  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub detailed_description: String,

  #[serde(default)]
  pub ai_summary: String,

  #[serde(default)]
  pub category: String,

  #[serde(default)]
  pub subcategory: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub github_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub demo_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stars: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub license: Option<String>,

  /// 3D embedding coordinates, for visualization layers only.
  /// Never consumed by the matching core.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coordinates: Option<[f64; 3]>,

  /// Pass-through metadata columns (downloads, timestamps, ...)
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl ProjectRecord {
  /// Apply documented defaults and derivations. Called once per record
  /// at load time; `id` is the record's position in the dataset.
  pub fn resolve(&mut self, id: usize) {
    self.id = id;

    if self.title.trim().is_empty() {
      self.title = UNKNOWN_TITLE.to_string();
    }
    if self.category.trim().is_empty() {
      self.category = DEFAULT_CATEGORY.to_string();
    }
    if self.subcategory.trim().is_empty() {
      self.subcategory = DEFAULT_SUBCATEGORY.to_string();
    }

    self.project_url = clean_url(self.project_url.take());
    self.github_url = clean_url(self.github_url.take());
    self.demo_url = clean_url(self.demo_url.take());

    if self.github_url.is_none() {
      self.github_url = annotate::extract_github_url(&self.description)
        .or_else(|| annotate::extract_github_url(&self.title));
    }

    if self.coordinates.is_none() {
      self.coordinates = Some(synthesize_coordinates(id, &self.title));
    }
  }

  /// All free-text fields joined into one matching document. The field
  /// list is the documented corpus policy: title, description, detailed
  /// description, AI summary, category, subcategory.
  pub fn combined_text(&self) -> String {
    let parts = [
      self.title.as_str(),
      self.description.as_str(),
      self.detailed_description.as_str(),
      self.ai_summary.as_str(),
      self.category.as_str(),
      self.subcategory.as_str(),
    ];

    parts.iter().filter(|p| !p.trim().is_empty()).cloned().collect::<Vec<_>>().join(" ")
  }

  /// Text the vector space indexes for this record; falls back to the
  /// title when every other field is blank.
  pub fn document_text(&self) -> String {
    let combined = self.combined_text();
    if combined.trim().is_empty() {
      self.title.clone()
    } else {
      combined
    }
  }
}

/// Treat blank and the literal string "None" (seen in exported tables)
/// as absent URLs.
fn clean_url(url: Option<String>) -> Option<String> {
  match url {
    Some(u) => {
      let trimmed = u.trim();
      if trimmed.is_empty() || trimmed == "None" {
        None
      } else {
        Some(trimmed.to_string())
      }
    }
    None => None,
  }
}

/// Deterministic stand-in coordinates for records without an embedding.
/// FNV-style hash of id + title, mapped into [-10, 10) per axis, so a
/// reload of the same dataset always produces the same layout.
fn synthesize_coordinates(id: usize, title: &str) -> [f64; 3] {
  let mut coords = [0.0f64; 3];
  for (axis, slot) in coords.iter_mut().enumerate() {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325 ^ (axis as u64 + 1);
    for byte in title.bytes().chain(id.to_le_bytes()) {
      hash ^= byte as u64;
      hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    *slot = (hash % 20_000) as f64 / 1_000.0 - 10.0;
  }
  coords
}
