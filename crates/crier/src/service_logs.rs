//! In-memory log storage for network services
//!
//! A bounded ring buffer of structured log entries with thread-safe
//! async access. Services keep one `ServiceLogs` instance, write into
//! it from request handlers, and serve its contents from a `/logs`
//! endpoint. Oldest entries are evicted once capacity is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Request metadata attached to a log entry
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LogContext {
  /// Request ID for correlation
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_id: Option<String>,

  /// HTTP method
  #[serde(skip_serializing_if = "Option::is_none")]
  pub method: Option<String>,

  /// Request path
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,

  /// HTTP status code
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status_code: Option<u16>,

  /// Request duration in milliseconds
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration_ms: Option<f64>,
}

/// A structured log entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
  pub timestamp: DateTime<Utc>,
  pub level: String,
  pub message: String,
  pub component: String,

  /// Optional request context
  #[serde(skip_serializing_if = "Option::is_none")]
  pub context: Option<LogContext>,
}

struct ServiceLogsInner {
  entries: VecDeque<LogEntry>,
  max_entries: usize,
  silent: bool,
}

impl ServiceLogsInner {
  fn push(&mut self, level: &str, message: &str, component: &str, context: Option<LogContext>) {
    if self.entries.len() >= self.max_entries {
      self.entries.pop_front();
    }

    self.entries.push_back(LogEntry {
      timestamp: Utc::now(),
      level: level.to_string(),
      message: message.to_string(),
      component: component.to_string(),
      context,
    });
  }

  fn get_logs(&self, limit: Option<usize>, level_filter: Option<&str>) -> Vec<LogEntry> {
    let mut logs: Vec<LogEntry> = self
      .entries
      .iter()
      .filter(|entry| {
        level_filter.map_or(true, |filter| filter == "all" || entry.level == filter)
      })
      .cloned()
      .collect();

    // Newest first
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(limit) = limit {
      logs.truncate(limit);
    }

    logs
  }
}

/// Thread-safe bounded log storage for services
#[derive(Clone)]
pub struct ServiceLogs {
  inner: Arc<Mutex<ServiceLogsInner>>,
}

impl ServiceLogs {
  /// Create a new log buffer holding at most `max_entries` entries
  pub fn new(max_entries: usize) -> Self {
    Self::new_with_silent(max_entries, false)
  }

  /// Create a new log buffer; `silent` suppresses console echo
  pub fn new_with_silent(max_entries: usize, silent: bool) -> Self {
    Self {
      inner: Arc::new(Mutex::new(ServiceLogsInner {
        entries: VecDeque::with_capacity(max_entries),
        max_entries,
        silent,
      })),
    }
  }

  /// Add a log entry with optional request context
  pub async fn add_log(
    &self,
    level: &str,
    message: &str,
    component: &str,
    context: Option<LogContext>,
  ) {
    let mut guard = self.inner.lock().await;
    guard.push(level, message, component, context);
  }

  /// Retrieve entries, newest first, with optional level filter and limit
  pub async fn get_logs(&self, limit: Option<usize>, level_filter: Option<&str>) -> Vec<LogEntry> {
    let guard = self.inner.lock().await;
    guard.get_logs(limit, level_filter)
  }

  /// Number of stored entries
  pub async fn len(&self) -> usize {
    let guard = self.inner.lock().await;
    guard.entries.len()
  }

  /// Whether the buffer is empty
  pub async fn is_empty(&self) -> bool {
    self.len().await == 0
  }

  async fn record(&self, level: &str, message: &str, component: &str, context: Option<LogContext>) {
    self.add_log(level, message, component, context).await;

    let guard = self.inner.lock().await;
    if !guard.silent {
      match level {
        "warn" => crate::warn(message),
        "error" => crate::error(message),
        "success" => crate::success(message),
        "debug" => crate::debug(message),
        _ => crate::info(message),
      }
    }
  }

  /// Log an info message (buffer + console unless silent)
  pub async fn info(&self, message: &str, component: &str) {
    self.record("info", message, component, None).await;
  }

  /// Log a warning message (buffer + console unless silent)
  pub async fn warn(&self, message: &str, component: &str) {
    self.record("warn", message, component, None).await;
  }

  /// Log an error message (buffer + console unless silent)
  pub async fn error(&self, message: &str, component: &str) {
    self.record("error", message, component, None).await;
  }

  /// Log a success message (buffer + console unless silent)
  pub async fn success(&self, message: &str, component: &str) {
    self.record("success", message, component, None).await;
  }

  /// Log an info message with request context
  pub async fn info_with_context(&self, message: &str, component: &str, context: LogContext) {
    self.record("info", message, component, Some(context)).await;
  }

  /// Log a warning message with request context
  pub async fn warn_with_context(&self, message: &str, component: &str, context: LogContext) {
    self.record("warn", message, component, Some(context)).await;
  }

  /// Log an error message with request context
  pub async fn error_with_context(&self, message: &str, component: &str, context: LogContext) {
    self.record("error", message, component, Some(context)).await;
  }
}
