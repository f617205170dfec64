use crate::vectorizer::{FittedIndex, SparseVector};

/// Cosine similarity between two sparse vectors. Vectors coming out of
/// the vectorizer are already L2-normalized, so this is effectively a
/// sparse dot product, bounded in [0, 1] for non-negative weights.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f32 {
  let dot = sparse_dot(a, b);

  let magnitude_a: f32 = a.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
  let magnitude_b: f32 = b.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();

  if magnitude_a == 0.0 || magnitude_b == 0.0 {
    0.0
  } else {
    dot / (magnitude_a * magnitude_b)
  }
}

/// Dot product over index-sorted sparse vectors (merge walk)
fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f32 {
  let mut dot = 0.0;
  let (mut i, mut j) = (0, 0);

  while i < a.len() && j < b.len() {
    let (ai, aw) = a[i];
    let (bj, bw) = b[j];
    match ai.cmp(&bj) {
      std::cmp::Ordering::Less => i += 1,
      std::cmp::Ordering::Greater => j += 1,
      std::cmp::Ordering::Equal => {
        dot += aw * bw;
        i += 1;
        j += 1;
      }
    }
  }

  dot
}

/// Rank every corpus document against a query text.
///
/// Returns (record id, raw cosine score) pairs, sorted descending by
/// score with ties broken by corpus order, capped at `top_k` and
/// filtered by `min_score`. A query that normalizes to nothing simply
/// scores zero everywhere and yields no results; it never errors.
pub fn rank(
  index: &FittedIndex,
  query_text: &str,
  top_k: usize,
  min_score: f32,
) -> Vec<(usize, f32)> {
  let top_k = top_k.max(1);
  let query_vector = index.transform(query_text);

  let mut scored: Vec<(usize, f32)> = index
    .doc_vectors()
    .iter()
    .enumerate()
    .map(|(id, doc_vector)| (id, cosine(&query_vector, doc_vector)))
    .filter(|(_, score)| *score > min_score)
    .collect();

  scored.sort_by(|a, b| {
    b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0))
  });

  scored.truncate(top_k);
  scored
}
