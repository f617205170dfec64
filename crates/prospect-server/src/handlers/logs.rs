//! Service log handler

use axum::{
  extract::{Query, State},
  response::Json as ResponseJson,
};

use crate::state::SharedState;
use crate::types::{LogsQuery, LogsResponse};

/// GET /logs - recent service log entries, newest first
pub async fn get_logs(
  State(state): State<SharedState>,
  Query(query): Query<LogsQuery>,
) -> ResponseJson<LogsResponse> {
  let logs = state.logs.get_logs(query.limit, query.level.as_deref()).await;
  ResponseJson(LogsResponse { logs })
}
