use prospect::annotate;
use prospect::config::MatcherConfig;
use prospect::error::ProspectError;
use prospect::matcher::ProjectMatcher;
use prospect::record::ProjectRecord;
use prospect::vectorizer::VectorizerConfig;

#[cfg(test)]
mod edge_case_tests {
  use super::*;

  fn record(id: usize, title: &str, description: &str) -> ProjectRecord {
    let mut record = ProjectRecord {
      title: title.to_string(),
      description: description.to_string(),
      ..Default::default()
    };
    record.resolve(id);
    record
  }

  #[test]
  fn test_empty_corpus_is_a_distinct_error() {
    let result = ProjectMatcher::build(vec![], MatcherConfig::default());

    // "corpus failed to load" must be distinguishable from "no results"
    match result {
      Err(ProspectError::EmptyCorpus) => {}
      other => panic!("expected EmptyCorpus, got {other:?}"),
    }
  }

  #[test]
  fn test_error_messages_are_descriptive() {
    let error = ProjectMatcher::build(vec![], MatcherConfig::default()).unwrap_err();
    assert!(error.to_string().contains("empty corpus"));
  }

  #[test]
  fn test_record_with_no_text_still_ranks_neighbors() {
    let mut blank = ProjectRecord::default();
    blank.resolve(1);

    let records = vec![record(0, "Widget", "an ai chatbot for support"), blank];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let matches = matcher.find_similar("ai chatbot", 5);
    assert!(!matches.is_empty());
    assert_eq!(matches[0].project.id, 0);
  }

  #[test]
  fn test_github_url_round_trip() {
    let description = "Check it out: https://github.com/acme/widget";
    assert_eq!(
      annotate::extract_github_url(description).as_deref(),
      Some("https://github.com/acme/widget")
    );
  }

  #[test]
  fn test_github_url_absent_is_none_not_empty() {
    let extracted = annotate::extract_github_url("a project with no links");
    assert!(extracted.is_none());
  }

  #[test]
  fn test_github_url_never_panics_on_odd_text() {
    for text in ["", "   ", "github.com/", "@", "https://github.com", "@@@///", "\u{0}\u{1}"] {
      let _ = annotate::extract_github_url(text);
    }
  }

  #[test]
  fn test_queries_with_only_stop_words() {
    let records = vec![record(0, "Widget", "an ai chatbot")];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let matches = matcher.find_similar("the and of with", 5);
    assert!(matches.is_empty());
  }

  #[test]
  fn test_identical_scores_keep_corpus_order() {
    let records = vec![
      record(0, "A", "identical twin document"),
      record(1, "B", "identical twin document"),
      record(2, "C", "identical twin document"),
    ];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let matches = matcher.find_similar("identical twin document", 5);
    let ids: Vec<usize> = matches.iter().map(|m| m.project.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
  }

  #[test]
  fn test_min_score_zero_returns_all_overlapping() {
    let config = MatcherConfig { min_score: 0.0, ..Default::default() };
    let records = vec![
      record(0, "A", "rust compiler"),
      record(1, "B", "rust interpreter"),
      record(2, "C", "gardening tips"),
    ];
    let matcher = ProjectMatcher::build(records, config).unwrap();

    let matches = matcher.find_similar("rust", 5);
    let ids: Vec<usize> = matches.iter().map(|m| m.project.id).collect();
    assert!(ids.contains(&0));
    assert!(ids.contains(&1));
    // The gardening project shares no query vocabulary and scores 0,
    // which is not strictly above the threshold
    assert!(!ids.contains(&2));
  }

  #[test]
  fn test_stop_word_filtering_is_optional() {
    let config = MatcherConfig {
      vectorizer: VectorizerConfig { use_stop_words: false, ..Default::default() },
      ..Default::default()
    };
    let records = vec![record(0, "Widget", "the chatbot for the people")];
    let matcher = ProjectMatcher::build(records, config).unwrap();

    let matches = matcher.find_similar("the chatbot", 5);
    assert!(!matches.is_empty());
  }

  #[test]
  fn test_unicode_text_does_not_crash() {
    let records = vec![
      record(0, "Caf\u{e9} Finder", "una aplicaci\u{f3}n para encontrar caf\u{e9}s \u{2615}"),
      record(1, "Widget", "plain ascii description"),
    ];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let matches = matcher.find_similar("aplicaci\u{f3}n caf\u{e9}s", 5);
    assert!(!matches.is_empty());
    assert_eq!(matches[0].project.id, 0);
  }

  #[test]
  fn test_very_long_query_is_handled() {
    let records = vec![record(0, "Widget", "an ai chatbot for support")];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let long_query = "chatbot support ".repeat(5_000);
    let matches = matcher.find_similar(&long_query, 5);
    assert_eq!(matches.len(), 1);
  }

  #[test]
  fn test_duplicate_titles_keep_distinct_ids() {
    let records = vec![
      record(0, "Widget", "first widget project"),
      record(1, "Widget", "second widget project"),
    ];
    let matcher = ProjectMatcher::build(records, MatcherConfig::default()).unwrap();

    let matches = matcher.find_similar("widget project", 5);
    let ids: Vec<usize> = matches.iter().map(|m| m.project.id).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
  }
}
