//! Request context middleware
//!
//! Tags every request with a correlation id and records start/finish
//! entries in the shared service log buffer.

use axum::{
  extract::{Request, State},
  middleware::Next,
  response::Response,
};
use uuid::Uuid;

use crate::state::SharedState;
use crier::service_logs::{LogContext, ServiceLogs};

/// Per-request context injected into handler extensions
#[derive(Clone)]
pub struct RequestContext {
  pub request_id: Uuid,
  pub method: String,
  pub path: String,
  logs: ServiceLogs,
}

impl RequestContext {
  fn new(method: String, path: String, logs: ServiceLogs) -> Self {
    Self { request_id: Uuid::new_v4(), method, path, logs }
  }

  fn context(&self) -> LogContext {
    LogContext {
      request_id: Some(self.request_id.to_string()),
      method: Some(self.method.clone()),
      path: Some(self.path.clone()),
      ..Default::default()
    }
  }

  pub async fn log_info(&self, message: &str, component: &str) {
    self.logs.info_with_context(message, component, self.context()).await;
  }

  pub async fn log_warn(&self, message: &str, component: &str) {
    self.logs.warn_with_context(message, component, self.context()).await;
  }

  pub async fn log_error(&self, message: &str, component: &str) {
    self.logs.error_with_context(message, component, self.context()).await;
  }

  async fn log_complete(&self, status_code: u16, duration_ms: f64) {
    let context = LogContext {
      status_code: Some(status_code),
      duration_ms: Some(duration_ms),
      ..self.context()
    };
    self.logs.info_with_context("request completed", "http", context).await;
  }
}

/// Inject a RequestContext and log request completion with timing
pub async fn request_context(
  State(state): State<SharedState>,
  mut request: Request,
  next: Next,
) -> Response {
  let context = RequestContext::new(
    request.method().to_string(),
    request.uri().path().to_string(),
    state.logs.clone(),
  );

  request.extensions_mut().insert(context.clone());

  let started = std::time::Instant::now();
  let response = next.run(request).await;

  let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
  context.log_complete(response.status().as_u16(), duration_ms).await;

  response
}
