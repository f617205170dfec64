//! Crier - terminal logging for the prospect tools
//!
//! Level-prefixed, colored logging to stderr, plus timestamped event
//! variants for long-running processes. The optional `service-logs`
//! feature adds a thread-safe in-memory log buffer that network
//! services can expose over a `/logs` endpoint.
//!
//! Standard functions: `info()`, `warn()`, `error()`, `debug()`, `success()`
//!
//! Event functions: `event_info()`, `event_warn()`, `event_error()`, `event_success()`

use chrono::Local;
use colored::*;

#[cfg(feature = "service-logs")]
pub mod service_logs;

/// Emit a message to stderr, one line at a time
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a fixed-width colored level prefix
fn level_prefix(color: Color, level: &str) -> String {
  format!("{:>5} {}", level.color(color).bold(), "|".dimmed())
}

/// Info level logging - general information
pub fn info(message: &str) {
  let prefix = level_prefix(Color::Blue, "info");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  let prefix = level_prefix(Color::Yellow, "warn");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  let prefix = level_prefix(Color::Red, "error");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Debug level logging - detailed diagnostic information
pub fn debug(message: &str) {
  let prefix = level_prefix(Color::Magenta, "debug");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  let prefix = level_prefix(Color::Green, "ok");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

fn event_prefix(color: Color, level: &str) -> String {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  format!("[{}] [{}]", level.color(color).bold(), timestamp.cyan())
}

/// Timestamped info event
pub fn event_info(message: &str) {
  let prefix = event_prefix(Color::Blue, "event");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Timestamped warning event
pub fn event_warn(message: &str) {
  let prefix = event_prefix(Color::Yellow, "event");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Timestamped error event
pub fn event_error(message: &str) {
  let prefix = event_prefix(Color::Red, "event");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Timestamped success event
pub fn event_success(message: &str) {
  let prefix = event_prefix(Color::Green, "event");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Display a message framed by a horizontal rule
pub fn headline(message: &str) {
  let rule = "-".repeat(50);
  log(&rule.dimmed().to_string());
  log(&message.bold().to_string());
  log(&rule.dimmed().to_string());
}

#[macro_export]
macro_rules! info {
  ($msg:expr) => {
    $crate::info($msg)
  };
}

#[macro_export]
macro_rules! warn {
  ($msg:expr) => {
    $crate::warn($msg)
  };
}

#[macro_export]
macro_rules! error {
  ($msg:expr) => {
    $crate::error($msg)
  };
}

#[macro_export]
macro_rules! debug {
  ($msg:expr) => {
    $crate::debug($msg)
  };
}

#[macro_export]
macro_rules! success {
  ($msg:expr) => {
    $crate::success($msg)
  };
}
