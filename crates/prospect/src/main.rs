use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use prospect::commands;
use prospect::config::MatcherConfig;
use prospect::loader;

#[derive(Parser)]
#[command(name = "prospect")]
#[command(
  about = "Prospect - Project-Idea Similarity Matching\nFind existing projects closest to a free-text idea"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Common dataset arguments
#[derive(Args)]
struct DataArgs {
  /// Project dataset file (.json, .yaml); PROSPECT_DATA overrides
  #[arg(short, long, env = "PROSPECT_DATA")]
  data: Option<PathBuf>,

  /// Optional matcher config file
  #[arg(short, long)]
  config: Option<PathBuf>,
}

impl DataArgs {
  fn data_path(&self) -> PathBuf {
    self.data.clone().unwrap_or_else(loader::default_data_path)
  }

  fn load_config(&self) -> Result<MatcherConfig> {
    Ok(MatcherConfig::load(self.config.as_deref())?)
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Rank projects by similarity to an idea
  Match {
    #[command(flatten)]
    data: DataArgs,
    /// Idea text (space-separated words)
    #[arg(required = true)]
    idea: Vec<String>,
    /// Maximum number of matches to return
    #[arg(short = 'k', long)]
    top_k: Option<usize>,
    /// Minimum raw similarity score (0-1 scale)
    #[arg(short, long)]
    min_score: Option<f32>,
    /// Emit matches as JSON instead of cards
    #[arg(short, long)]
    json: bool,
  },
  /// List projects in the dataset
  List {
    #[command(flatten)]
    data: DataArgs,
    /// Only show projects in this category
    #[arg(long)]
    category: Option<String>,
    /// Show descriptions as well
    #[arg(short, long)]
    verbose: bool,
  },
  /// Show one project record in full
  Show {
    #[command(flatten)]
    data: DataArgs,
    /// Project id (dataset row index)
    id: usize,
  },
  /// Corpus and vector space statistics
  Stats {
    #[command(flatten)]
    data: DataArgs,
  },
}

fn main() {
  if let Err(e) = run() {
    crier::error(&format!("{e:#}"));
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Match { data, idea, top_k, min_score, json } => {
      let config = data.load_config()?;
      commands::match_idea(&idea.join(" "), &data.data_path(), config, top_k, min_score, json)?;
    }
    Commands::List { data, category, verbose } => {
      commands::list_projects(&data.data_path(), category.as_deref(), verbose)?;
    }
    Commands::Show { data, id } => {
      commands::show_project(&data.data_path(), id)?;
    }
    Commands::Stats { data } => {
      let config = data.load_config()?;
      commands::stats(&data.data_path(), config)?;
    }
  }

  Ok(())
}
