use std::collections::HashSet;

/// Common English stop words dropped before vectorization
const STOP_WORDS: &[&str] = &[
  // Articles and determiners
  "the", "a", "an", "this", "that", "these", "those", // Conjunctions
  "and", "or", "but", "if", "as", // Prepositions
  "in", "on", "at", "to", "for", "of", "with", "by", "from", "into", "over", // Common verbs
  "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
  "will", "would", "could", "should", "can", "may", "might", // Pronouns
  "i", "you", "your", "we", "our", "us", "they", "them", "their", "it", "its", "he", "she",
];

/// Minimum token length kept when stop-word filtering is enabled
pub const MIN_TOKEN_LEN: usize = 2;

/// Get the stop words as a HashSet for efficient lookup
pub fn stop_words() -> HashSet<&'static str> {
  STOP_WORDS.iter().cloned().collect()
}

pub fn is_stop_word(word: &str) -> bool {
  STOP_WORDS.contains(&word)
}

/// Normalize arbitrary text for matching: lowercase, strip everything
/// that is not a letter, digit or whitespace, collapse whitespace runs.
/// Empty or null-ish input yields an empty string, never an error.
pub fn normalize(text: &str) -> String {
  let lowered: String = text
    .to_lowercase()
    .chars()
    .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
    .collect();

  lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into raw tokens (no filtering)
pub fn tokens(text: &str) -> Vec<String> {
  normalize(text).split_whitespace().map(|t| t.to_string()).collect()
}

/// Tokens with stop words and too-short tokens removed. Filtering is a
/// quality knob: disabling it only changes ranking quality, never
/// correctness.
pub fn content_tokens(text: &str, use_stop_words: bool) -> Vec<String> {
  tokens(text)
    .into_iter()
    .filter(|t| {
      if use_stop_words {
        t.len() >= MIN_TOKEN_LEN && !is_stop_word(t)
      } else {
        true
      }
    })
    .collect()
}
