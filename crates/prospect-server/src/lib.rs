//! REST facade for the prospect matching engine
//!
//! A thin axum server exposing the similarity search over HTTP:
//! `POST /api/similar-projects` for queries, `GET /api/health` for
//! liveness, plus reload, version and log endpoints for operations.

pub mod enrich;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod state;
pub mod types;
