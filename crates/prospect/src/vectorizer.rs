use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{ProspectError, Result};
use crate::normalize;

/// Sparse TF-IDF vector: (term index, weight) pairs sorted by index,
/// L2-normalized so cosine similarity reduces to a dot product.
pub type SparseVector = Vec<(usize, f32)>;

/// Vector space settings. Every knob has a serde default so partial
/// config files work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorizerConfig {
  /// Cap on learned vocabulary size
  #[serde(default = "default_max_features")]
  pub max_features: usize,

  /// Inclusive n-gram span, e.g. (1, 2) = unigrams + bigrams
  #[serde(default = "default_ngram_range")]
  pub ngram_range: (usize, usize),

  /// Terms must appear in at least this many documents
  #[serde(default = "default_min_document_frequency")]
  pub min_document_frequency: usize,

  /// Terms appearing in more than this share of documents are dropped
  #[serde(default = "default_max_document_frequency_ratio")]
  pub max_document_frequency_ratio: f32,

  /// Drop stop words and single-character tokens before counting
  #[serde(default = "default_use_stop_words")]
  pub use_stop_words: bool,
}

fn default_max_features() -> usize {
  1000
}
fn default_ngram_range() -> (usize, usize) {
  (1, 2)
}
fn default_min_document_frequency() -> usize {
  1
}
fn default_max_document_frequency_ratio() -> f32 {
  0.95
}
fn default_use_stop_words() -> bool {
  true
}

impl Default for VectorizerConfig {
  fn default() -> Self {
    Self {
      max_features: default_max_features(),
      ngram_range: default_ngram_range(),
      min_document_frequency: default_min_document_frequency(),
      max_document_frequency_ratio: default_max_document_frequency_ratio(),
      use_stop_words: default_use_stop_words(),
    }
  }
}

/// A fitted vector space: learned vocabulary, IDF weights and one
/// document vector per corpus record. Read-only after fitting.
#[derive(Debug, Clone)]
pub struct FittedIndex {
  vocabulary: HashMap<String, usize>,
  idf: Vec<f32>,
  doc_vectors: Vec<SparseVector>,
  config: VectorizerConfig,
}

pub struct TfidfVectorizer;

impl TfidfVectorizer {
  /// Fit a TF-IDF vector space over the corpus. Deterministic for a
  /// given corpus and config: no randomness anywhere in vocabulary
  /// selection or weighting.
  pub fn fit(corpus: &Corpus, config: &VectorizerConfig) -> Result<FittedIndex> {
    if corpus.is_empty() {
      return Err(ProspectError::EmptyCorpus);
    }

    let tokenized: Vec<Vec<String>> =
      corpus.documents().iter().map(|doc| extract_terms(doc, config)).collect();

    let n_docs = corpus.len();
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for terms in &tokenized {
      let mut seen: Vec<&str> = terms.iter().map(|t| t.as_str()).collect();
      seen.sort_unstable();
      seen.dedup();
      for term in seen {
        *document_frequency.entry(term).or_insert(0) += 1;
      }
    }

    let max_df = max_document_count(config.max_document_frequency_ratio, n_docs);
    let mut selected: Vec<(&str, usize)> = document_frequency
      .iter()
      .filter(|(_, &df)| df >= config.min_document_frequency && df <= max_df)
      .map(|(&term, &df)| (term, df))
      .collect();

    // Deterministic pruning: keep the most widely used terms, ties
    // broken alphabetically, then index the survivors alphabetically.
    selected.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    selected.truncate(config.max_features);
    selected.sort_unstable_by(|a, b| a.0.cmp(b.0));

    if selected.is_empty() {
      return Err(ProspectError::Vectorization(
        "no terms survived document-frequency pruning".to_string(),
      ));
    }

    let mut vocabulary: HashMap<String, usize> = HashMap::with_capacity(selected.len());
    let mut idf: Vec<f32> = Vec::with_capacity(selected.len());
    for (index, (term, df)) in selected.iter().enumerate() {
      vocabulary.insert(term.to_string(), index);
      // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
      idf.push(((1.0 + n_docs as f32) / (1.0 + *df as f32)).ln() + 1.0);
    }

    let index = FittedIndex { vocabulary, idf, doc_vectors: Vec::new(), config: config.clone() };
    let doc_vectors = tokenized.iter().map(|terms| index.weigh_terms(terms)).collect();

    debug!(
      documents = n_docs,
      vocabulary = index.vocabulary.len(),
      "fitted TF-IDF vector space"
    );

    Ok(FittedIndex { doc_vectors, ..index })
  }
}

impl FittedIndex {
  /// Project one text into the fitted space. Out-of-vocabulary terms
  /// contribute zero weight; a query with no known terms produces an
  /// empty vector, not an error.
  pub fn transform(&self, text: &str) -> SparseVector {
    let terms = extract_terms(&normalize::normalize(text), &self.config);
    self.weigh_terms(&terms)
  }

  fn weigh_terms(&self, terms: &[String]) -> SparseVector {
    let mut term_frequency: HashMap<usize, f32> = HashMap::new();
    for term in terms {
      if let Some(&index) = self.vocabulary.get(term.as_str()) {
        *term_frequency.entry(index).or_insert(0.0) += 1.0;
      }
    }

    let mut vector: SparseVector =
      term_frequency.into_iter().map(|(index, tf)| (index, tf * self.idf[index])).collect();
    vector.sort_unstable_by_key(|&(index, _)| index);

    l2_normalize(&mut vector);
    vector
  }

  pub fn vocabulary_size(&self) -> usize {
    self.vocabulary.len()
  }

  pub fn num_documents(&self) -> usize {
    self.doc_vectors.len()
  }

  /// Fitted document vectors, aligned to corpus order
  pub fn doc_vectors(&self) -> &[SparseVector] {
    &self.doc_vectors
  }

  pub fn config(&self) -> &VectorizerConfig {
    &self.config
  }
}

/// Tokenize a normalized document and expand it into n-gram terms
fn extract_terms(document: &str, config: &VectorizerConfig) -> Vec<String> {
  let tokens = normalize::content_tokens(document, config.use_stop_words);

  let (lo, hi) = config.ngram_range;
  let lo = lo.max(1);
  let hi = hi.max(lo);

  let mut terms = Vec::with_capacity(tokens.len() * (hi - lo + 1));
  for n in lo..=hi {
    if tokens.len() < n {
      break;
    }
    for window in tokens.windows(n) {
      terms.push(window.join(" "));
    }
  }
  terms
}

/// Highest allowed document count for a term given the max-df ratio.
/// Rounds up so tiny corpora (including a single document) keep their
/// vocabulary instead of pruning everything.
fn max_document_count(ratio: f32, n_docs: usize) -> usize {
  if ratio >= 1.0 {
    return n_docs;
  }
  ((ratio as f64 * n_docs as f64).ceil() as usize).max(1)
}

fn l2_normalize(vector: &mut SparseVector) {
  let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
  if norm > 0.0 {
    for (_, w) in vector.iter_mut() {
      *w /= norm;
    }
  }
}
