use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize;

/// Ordered GitHub URL patterns: full URLs first, then bare domains,
/// then "@owner/repo" mentions. First match wins.
static GITHUB_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
  vec![
    Regex::new(r"https?://github\.com/[A-Za-z0-9-]+/[A-Za-z0-9._-]+").unwrap(),
    Regex::new(r"github\.com/[A-Za-z0-9-]+/[A-Za-z0-9._-]+").unwrap(),
    Regex::new(r"@([A-Za-z0-9-]+/[A-Za-z0-9._-]+)").unwrap(),
  ]
});

/// Fixed technology keyword table. This is a transparent counting
/// heuristic over the project text, not a learned classifier, and is
/// labeled as such wherever it surfaces.
static TECH_CATEGORIES: &[(&str, &[&str])] = &[
  ("Frontend", &["react", "vue", "angular", "javascript", "typescript", "html", "css", "svelte"]),
  ("Backend", &["python", "node.js", "django", "flask", "express", "java", "php", "ruby", "rails"]),
  (
    "AI/ML",
    &[
      "machine learning",
      "artificial intelligence",
      "tensorflow",
      "pytorch",
      "scikit-learn",
      "neural network",
      "deep learning",
      "gpt",
      "openai",
    ],
  ),
  ("Mobile", &["ios", "android", "react native", "flutter", "swift", "kotlin", "mobile app"]),
  ("Cloud", &["aws", "azure", "google cloud", "docker", "kubernetes", "serverless", "heroku"]),
  ("Data", &["database", "sql", "mongodb", "postgresql", "redis", "elasticsearch", "big data"]),
  ("Blockchain", &["blockchain", "ethereum", "bitcoin", "smart contract", "web3", "defi", "nft"]),
  ("IoT", &["iot", "internet of things", "sensor", "arduino", "raspberry pi", "hardware"]),
];

/// Fixed business-model keyword table, same heuristic caveats
static BUSINESS_MODELS: &[(&str, &[&str])] = &[
  ("SaaS", &["saas", "software as a service", "subscription", "monthly", "annual"]),
  ("Marketplace", &["marketplace", "platform", "connect", "buy", "sell", "exchange"]),
  ("E-commerce", &["ecommerce", "e-commerce", "shop", "store", "payment", "checkout"]),
  ("Freemium", &["freemium", "free tier", "premium", "upgrade"]),
  ("Enterprise", &["enterprise", "b2b", "corporate", "enterprise solution"]),
];

const TECH_KEYWORD_WEIGHT: u32 = 10;
const BUSINESS_KEYWORD_WEIGHT: u32 = 15;

/// Fallback reason when query and project share no long tokens
pub const GENERIC_MATCH_REASON: &str = "Semantic similarity in project context";

/// Tokens this short are too common to justify a match reason
const MIN_REASON_TOKEN_LEN: usize = 4;
const MAX_REASON_TOKENS: usize = 3;

/// One detected category with its keyword evidence.
/// `confidence` is `min(matches x weight, 100)` - a saturating count,
/// not a calibrated probability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagHit {
  pub label: String,
  pub confidence: u32,
  pub keywords_found: Vec<String>,
}

/// Scan text for a GitHub repository link. Returns the first match
/// normalized to an https:// URL, or None. Never panics on malformed
/// or empty text.
pub fn extract_github_url(text: &str) -> Option<String> {
  if text.trim().is_empty() {
    return None;
  }

  for (position, pattern) in GITHUB_PATTERNS.iter().enumerate() {
    if let Some(captures) = pattern.captures(text) {
      // The mention form captures just "owner/repo"
      let matched = if position == 2 {
        captures.get(1).map(|m| format!("github.com/{}", m.as_str()))
      } else {
        captures.get(0).map(|m| m.as_str().to_string())
      };

      if let Some(url) = matched {
        if url.starts_with("http") {
          return Some(url);
        }
        return Some(format!("https://{url}"));
      }
    }
  }

  None
}

/// Best-effort explanation of why a project matched: up to three long
/// tokens shared between the query and the project text, in query
/// order, or a generic message when nothing overlaps.
pub fn match_reason(query: &str, project_text: &str) -> String {
  let project_tokens: std::collections::HashSet<String> =
    normalize::tokens(project_text).into_iter().collect();

  let mut shared = Vec::new();
  for token in normalize::tokens(query) {
    if token.len() >= MIN_REASON_TOKEN_LEN
      && project_tokens.contains(&token)
      && !shared.contains(&token)
    {
      shared.push(token);
      if shared.len() == MAX_REASON_TOKENS {
        break;
      }
    }
  }

  if shared.is_empty() {
    GENERIC_MATCH_REASON.to_string()
  } else {
    format!("Shared concepts: {}", shared.join(", "))
  }
}

/// Detect technology categories present in the project text
pub fn technology_tags(text: &str) -> Vec<TagHit> {
  detect(text, TECH_CATEGORIES, TECH_KEYWORD_WEIGHT)
}

/// Detect business-model indicators present in the project text
pub fn business_model_tags(text: &str) -> Vec<TagHit> {
  detect(text, BUSINESS_MODELS, BUSINESS_KEYWORD_WEIGHT)
}

fn detect(text: &str, table: &[(&str, &[&str])], weight: u32) -> Vec<TagHit> {
  let haystack = format!(" {} ", normalize::normalize(text));
  let mut hits = Vec::new();

  for (label, keywords) in table {
    let mut found = Vec::new();
    for keyword in *keywords {
      // Keywords are normalized the same way as the text so forms like
      // "node.js" and "ci/cd" still match
      let needle = normalize::normalize(keyword);
      if !needle.is_empty() && haystack.contains(&format!(" {needle} ")) {
        found.push(keyword.to_string());
      }
    }

    if !found.is_empty() {
      let confidence = (found.len() as u32 * weight).min(100);
      hits.push(TagHit { label: label.to_string(), confidence, keywords_found: found });
    }
  }

  hits
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_extract_full_github_url() {
    let text = "Check it out: https://github.com/acme/widget";
    assert_eq!(extract_github_url(text).as_deref(), Some("https://github.com/acme/widget"));
  }

  #[test]
  fn test_extract_bare_github_domain() {
    let text = "hosted at github.com/acme/widget-kit for now";
    assert_eq!(extract_github_url(text).as_deref(), Some("https://github.com/acme/widget-kit"));
  }

  #[test]
  fn test_extract_mention_form() {
    let text = "source lives in @acme/widget";
    assert_eq!(extract_github_url(text).as_deref(), Some("https://github.com/acme/widget"));
  }

  #[test]
  fn test_extract_no_match_is_none() {
    assert!(extract_github_url("no links in here").is_none());
    assert!(extract_github_url("").is_none());
    assert!(extract_github_url("   ").is_none());
  }

  #[test]
  fn test_extract_prefers_full_url() {
    let text = "mirror: github.com/other/mirror, main: https://github.com/acme/widget";
    assert_eq!(extract_github_url(text).as_deref(), Some("https://github.com/acme/widget"));
  }

  #[test]
  fn test_match_reason_reports_shared_tokens() {
    let reason = match_reason(
      "AI assistant for customer service tickets",
      "Customer support ticketing system with AI triage for customer teams",
    );
    assert!(reason.starts_with("Shared concepts:"));
    assert!(reason.contains("customer"));
  }

  #[test]
  fn test_match_reason_caps_at_three_tokens() {
    let reason = match_reason(
      "alpha bravo charlie delta echo",
      "alpha bravo charlie delta echo foxtrot",
    );
    let listed = reason.trim_start_matches("Shared concepts: ");
    assert_eq!(listed.split(", ").count(), 3);
  }

  #[test]
  fn test_match_reason_ignores_short_tokens() {
    // "ai" and "for" are too short to count as shared concepts
    let reason = match_reason("ai for fun", "ai for work");
    assert_eq!(reason, GENERIC_MATCH_REASON);
  }

  #[test]
  fn test_technology_tags_detects_categories() {
    let tags = technology_tags("A machine learning service built with pytorch and docker");

    let labels: Vec<_> = tags.iter().map(|t| t.label.as_str()).collect();
    assert!(labels.contains(&"AI/ML"));
    assert!(labels.contains(&"Cloud"));
  }

  #[test]
  fn test_technology_tags_confidence_saturates() {
    let text = "machine learning artificial intelligence tensorflow pytorch scikit-learn \
                neural network deep learning gpt openai";
    let tags = technology_tags(text);
    let ai = tags.iter().find(|t| t.label == "AI/ML").expect("AI/ML should be detected");

    assert_eq!(ai.confidence, 90);
    assert!(ai.confidence <= 100);
  }

  #[test]
  fn test_technology_tags_matches_punctuated_keywords() {
    let tags = technology_tags("backend in node.js with express");
    let backend = tags.iter().find(|t| t.label == "Backend");
    assert!(backend.is_some());
  }

  #[test]
  fn test_business_model_tags() {
    let tags = business_model_tags("A subscription based saas for b2b enterprise teams");

    let labels: Vec<_> = tags.iter().map(|t| t.label.as_str()).collect();
    assert!(labels.contains(&"SaaS"));
    assert!(labels.contains(&"Enterprise"));
  }

  #[test]
  fn test_no_tags_for_unrelated_text() {
    let tags = technology_tags("a quiet walk in the park");
    assert!(tags.is_empty());
  }
}
