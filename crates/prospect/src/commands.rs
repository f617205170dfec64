use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::MatcherConfig;
use crate::loader;
use crate::matcher::{AnnotatedMatch, IntegrationComplexity};

/// Run a similarity query and print the ranked matches
pub fn match_idea(
  idea: &str,
  data_path: &Path,
  config: MatcherConfig,
  top_k: Option<usize>,
  min_score: Option<f32>,
  json: bool,
) -> Result<()> {
  let mut config = config;
  if let Some(min_score) = min_score {
    config.min_score = min_score;
  }
  let top_k = top_k.unwrap_or(config.top_k);

  let matcher = loader::load_matcher(data_path, config)?;
  let matches = matcher.find_similar(idea, top_k);

  if json {
    println!("{}", serde_json::to_string_pretty(&matches)?);
    return Ok(());
  }

  if matches.is_empty() {
    println!("No similar projects found for: {}", idea.yellow());
    println!("({} projects searched)", matcher.total_projects());
    return Ok(());
  }

  println!(
    "Found {} similar projects ({} searched)\n",
    matches.len().to_string().green().bold(),
    matcher.total_projects()
  );

  for (position, matched) in matches.iter().enumerate() {
    display_match(position + 1, matched);
  }

  Ok(())
}

/// List project titles, optionally filtered by category
pub fn list_projects(data_path: &Path, category: Option<&str>, verbose: bool) -> Result<()> {
  let records = loader::load_records(data_path)?;

  let mut shown = 0;
  for record in &records {
    if let Some(filter) = category {
      if !record.category.eq_ignore_ascii_case(filter) {
        continue;
      }
    }
    shown += 1;

    println!(
      "{:>4}  {} {}",
      record.id.to_string().dimmed(),
      record.title.bold(),
      format!("[{}/{}]", record.category, record.subcategory).blue()
    );

    if verbose && !record.description.trim().is_empty() {
      for line in wrap_text(&record.description, 76) {
        println!("      {line}");
      }
    }
  }

  if shown == 0 {
    println!("No projects{}", category.map(|c| format!(" in category {c}")).unwrap_or_default());
  }

  Ok(())
}

/// Show one project record in full
pub fn show_project(data_path: &Path, id: usize) -> Result<()> {
  let records = loader::load_records(data_path)?;
  let record = records
    .get(id)
    .ok_or_else(|| crate::error::ProspectError::UnknownProject(id))?;

  println!("=== {} ===", record.title.blue().bold());
  println!("category: {}/{}", record.category, record.subcategory);

  if let Some(url) = &record.project_url {
    println!("website:  {url}");
  }
  if let Some(url) = &record.github_url {
    println!("github:   {url}");
  }
  if let Some(url) = &record.demo_url {
    println!("demo:     {url}");
  }
  if let Some(stars) = record.stars {
    println!("stars:    {stars}");
  }
  if let Some(license) = &record.license {
    println!("license:  {license}");
  }

  let description = if record.description.trim().is_empty() {
    &record.detailed_description
  } else {
    &record.description
  };
  if !description.trim().is_empty() {
    println!();
    for line in wrap_text(description, 80) {
      println!("{line}");
    }
  }

  Ok(())
}

/// Print corpus statistics after a fit: sizes, vocabulary, categories
pub fn stats(data_path: &Path, config: MatcherConfig) -> Result<()> {
  let matcher = loader::load_matcher(data_path, config)?;

  println!("projects:    {}", matcher.total_projects().to_string().bold());
  println!("vocabulary:  {}", matcher.index().vocabulary_size());
  println!(
    "ngram range: {:?}, max features: {}",
    matcher.config().vectorizer.ngram_range,
    matcher.config().vectorizer.max_features
  );

  let mut categories: Vec<(&str, usize)> = Vec::new();
  for record in matcher.corpus().records() {
    match categories.iter().position(|(name, _)| *name == record.category) {
      Some(found) => categories[found].1 += 1,
      None => categories.push((&record.category, 1)),
    }
  }
  categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

  println!("\ncategories:");
  for (name, count) in categories {
    println!("  {:>4}  {name}", count);
  }

  Ok(())
}

/// Render one match as a card
fn display_match(position: usize, matched: &AnnotatedMatch) {
  let header = format!(
    "#{position} {} ({}%)",
    matched.project.title.blue().bold(),
    format!("{:.1}", matched.score_percent).green()
  );
  println!("{header}");

  println!("   {}", matched.match_reason.dimmed());

  if !matched.technology_tags.is_empty() {
    let labels: Vec<String> = matched
      .technology_tags
      .iter()
      .map(|t| format!("{} {}%", t.label, t.confidence))
      .collect();
    // Keyword-count heuristic, not a model prediction
    println!("   stack (keyword scan): {}", labels.join(", ").yellow());
  }

  let effort = match matched.integration_complexity {
    IntegrationComplexity::Low => "low".green(),
    IntegrationComplexity::Medium => "medium".yellow(),
    IntegrationComplexity::High => "high".red(),
  };
  println!("   integration effort: {effort}");

  if let Some(url) = &matched.github_url {
    println!("   github: {url}");
  }

  if !matched.project.description.trim().is_empty() {
    for line in wrap_text(&matched.project.description, 76).into_iter().take(3) {
      println!("   {line}");
    }
  }
  println!();
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrap_text_respects_width() {
    let wrapped = wrap_text("one two three four five six seven eight nine ten", 15);
    for line in &wrapped {
      assert!(line.len() <= 15);
    }
  }

  #[test]
  fn test_wrap_text_keeps_paragraph_breaks() {
    let wrapped = wrap_text("first paragraph\n\nsecond paragraph", 80);
    assert!(wrapped.contains(&String::new()));
  }

  #[test]
  fn test_wrap_text_empty() {
    assert!(wrap_text("", 80).is_empty() || wrap_text("", 80) == vec![String::new()]);
  }
}
