use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crier::service_logs::ServiceLogs;
use prospect::config::MatcherConfig;
use prospect::loader;
use prospect_server::{routing, state::AppState};

/// How long a public registry lookup may take before it degrades
const ENRICH_TIMEOUT: Duration = Duration::from_secs(10);

/// How many log entries the /logs endpoint can serve
const LOG_CAPACITY: usize = 1000;

#[derive(Parser)]
#[command(name = "prospect-server")]
#[command(about = "REST facade for the prospect similarity matching engine")]
#[command(version)]
struct Cli {
  /// Address to listen on
  #[arg(short, long, default_value = "127.0.0.1:5001")]
  addr: String,

  /// Project dataset file (.json, .yaml); PROSPECT_DATA overrides
  #[arg(short, long, env = "PROSPECT_DATA")]
  data: Option<PathBuf>,

  /// Optional matcher config file
  #[arg(short, long)]
  config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prospect=info,prospect_server=info,tower_http=info".into()),
    )
    .init();

  let cli = Cli::parse();

  let data_path = cli.data.unwrap_or_else(loader::default_data_path);
  let config = MatcherConfig::load(cli.config.as_deref())?;

  let matcher = loader::load_matcher(&data_path, config.clone())
    .with_context(|| format!("failed to load dataset from {}", data_path.display()))?;
  crier::success(&format!(
    "indexed {} projects from {}",
    matcher.total_projects(),
    data_path.display()
  ));

  let http = reqwest::Client::builder()
    .timeout(ENRICH_TIMEOUT)
    .user_agent(concat!("prospect-server/", env!("CARGO_PKG_VERSION")))
    .build()
    .context("failed to build HTTP client")?;

  let logs = ServiceLogs::new(LOG_CAPACITY);
  let state =
    std::sync::Arc::new(AppState::new(matcher, logs, http, data_path, config));

  let router = routing::create_router(state);

  let listener = tokio::net::TcpListener::bind(&cli.addr)
    .await
    .with_context(|| format!("failed to bind {}", cli.addr))?;
  tracing::info!(addr = %cli.addr, "listening");
  crier::info(&format!("listening on http://{}", cli.addr));

  axum::serve(listener, router).await.context("server error")?;

  Ok(())
}
