use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::{self, TagHit};
use crate::config::MatcherConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::record::ProjectRecord;
use crate::similarity;
use crate::vectorizer::{FittedIndex, TfidfVectorizer};

/// Rough integration effort grade derived from the similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationComplexity {
  Low,
  Medium,
  High,
}

impl IntegrationComplexity {
  /// Higher similarity means less glue work: > 0.7 low, > 0.4 medium
  pub fn from_score(score: f32) -> Self {
    if score > 0.7 {
      Self::Low
    } else if score > 0.4 {
      Self::Medium
    } else {
      Self::High
    }
  }
}

/// One ranked match with its heuristic annotations. Created fresh per
/// query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedMatch {
  pub project: ProjectRecord,

  /// Raw cosine similarity in [0, 1]
  pub score: f32,

  /// Display score on the 0-100 scale, rounded to two decimals
  pub score_percent: f32,

  /// GitHub URL from the record, or derived from its description
  #[serde(skip_serializing_if = "Option::is_none")]
  pub github_url: Option<String>,

  /// Keyword-overlap explanation (best-effort, not a precision claim)
  pub match_reason: String,

  /// Keyword-heuristic technology categories
  pub technology_tags: Vec<TagHit>,

  /// Keyword-heuristic business-model indicators
  pub business_tags: Vec<TagHit>,

  pub integration_complexity: IntegrationComplexity,
}

/// The similarity engine: a corpus and its fitted vector space, built
/// once per dataset and read-only afterwards. Queries share it freely
/// across threads; replacing a dataset means building a whole new
/// matcher and swapping it in.
#[derive(Debug)]
pub struct ProjectMatcher {
  corpus: Corpus,
  index: FittedIndex,
  config: MatcherConfig,
}

impl ProjectMatcher {
  /// Build the corpus and fit the vector space. Fails on an empty
  /// dataset or a corpus with no indexable text; those are load-time
  /// errors, distinct from "a query found nothing".
  pub fn build(records: Vec<ProjectRecord>, config: MatcherConfig) -> Result<Self> {
    let corpus = Corpus::build(records);
    let index = TfidfVectorizer::fit(&corpus, &config.vectorizer)?;

    debug!(
      projects = corpus.len(),
      vocabulary = index.vocabulary_size(),
      "project matcher ready"
    );

    Ok(Self { corpus, index, config })
  }

  /// Find projects similar to a free-text idea. The single public
  /// query entry point: normalize, vectorize, rank, annotate.
  ///
  /// An idea that normalizes to nothing (or matches nothing above the
  /// configured threshold) yields an empty list, never an error.
  pub fn find_similar(&self, idea: &str, top_k: usize) -> Vec<AnnotatedMatch> {
    let ranked = similarity::rank(&self.index, idea, top_k, self.config.min_score);

    debug!(idea_len = idea.len(), results = ranked.len(), "ranked similar projects");

    ranked
      .into_iter()
      .filter_map(|(id, score)| {
        let record = self.corpus.record(id)?;
        Some(annotate_match(record, idea, score))
      })
      .collect()
  }

  /// Query with the configured default result count
  pub fn find_similar_default(&self, idea: &str) -> Vec<AnnotatedMatch> {
    self.find_similar(idea, self.config.top_k)
  }

  pub fn total_projects(&self) -> usize {
    self.corpus.len()
  }

  pub fn corpus(&self) -> &Corpus {
    &self.corpus
  }

  pub fn index(&self) -> &FittedIndex {
    &self.index
  }

  pub fn config(&self) -> &MatcherConfig {
    &self.config
  }
}

/// Derive the auxiliary fields for one ranked record
fn annotate_match(record: &ProjectRecord, idea: &str, score: f32) -> AnnotatedMatch {
  let combined = record.combined_text();

  let github_url = record
    .github_url
    .clone()
    .or_else(|| annotate::extract_github_url(&record.description))
    .or_else(|| annotate::extract_github_url(&record.title));

  AnnotatedMatch {
    project: record.clone(),
    score,
    score_percent: (score * 10_000.0).round() / 100.0,
    github_url,
    match_reason: annotate::match_reason(idea, &combined),
    technology_tags: annotate::technology_tags(&combined),
    business_tags: annotate::business_model_tags(&combined),
    integration_complexity: IntegrationComplexity::from_score(score),
  }
}
