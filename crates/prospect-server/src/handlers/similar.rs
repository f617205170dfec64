//! Similarity search and corpus reload handlers

use axum::{
  extract::{Extension, Json, State},
  http::StatusCode,
  response::Json as ResponseJson,
};

use crate::enrich;
use crate::middleware::RequestContext;
use crate::state::SharedState;
use crate::types::{
  ErrorResponse, ProjectMatchData, ReloadResponse, SimilarProjectsRequest,
  SimilarProjectsResponse,
};

/// POST /api/similar-projects - rank projects against an idea
pub async fn similar_projects(
  State(state): State<SharedState>,
  Extension(context): Extension<RequestContext>,
  Json(request): Json<SimilarProjectsRequest>,
) -> Result<ResponseJson<SimilarProjectsResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  if request.idea.trim().is_empty() {
    context.log_warn("rejected blank idea", "similar-api").await;
    return Err((
      StatusCode::BAD_REQUEST,
      ResponseJson(ErrorResponse::new("Please provide an idea")),
    ));
  }

  let matcher = state.matcher().await;
  let matches = matcher.find_similar(&request.idea, request.limit);

  context
    .log_info(
      &format!("found {} matches for idea ({} chars)", matches.len(), request.idea.len()),
      "similar-api",
    )
    .await;

  let matches: Vec<ProjectMatchData> = if request.enrich {
    enrich::enrich_matches(&state.http, matches).await
  } else {
    matches.into_iter().map(ProjectMatchData::from).collect()
  };

  let total_found = matches.len();
  Ok(ResponseJson(SimilarProjectsResponse { success: true, matches, total_found }))
}

/// POST /api/reload - rebuild the corpus from the data file
pub async fn reload(
  State(state): State<SharedState>,
  Extension(context): Extension<RequestContext>,
) -> Result<ResponseJson<ReloadResponse>, (StatusCode, ResponseJson<ErrorResponse>)> {
  match state.reload().await {
    Ok(total_projects) => {
      context
        .log_info(&format!("corpus reloaded with {total_projects} projects"), "reload-api")
        .await;
      Ok(ResponseJson(ReloadResponse { success: true, total_projects }))
    }
    Err(e) => {
      context.log_error(&format!("corpus reload failed: {e}"), "reload-api").await;
      Err((
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseJson(ErrorResponse::new(format!("Failed to reload corpus: {e}"))),
      ))
    }
  }
}
