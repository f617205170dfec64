//! Prospect - Project-Idea Similarity Matching
//!
//! Turns a free-text project idea into a ranked list of existing projects
//! using TF-IDF vectorization and cosine similarity, with keyword-heuristic
//! annotations (GitHub URL extraction, shared-concept match reasons,
//! technology and business-model tags).

pub mod annotate;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod normalize;
pub mod record;
pub mod similarity;
pub mod vectorizer;

pub use error::{ProspectError, Result};
pub use matcher::{AnnotatedMatch, ProjectMatcher};
pub use record::ProjectRecord;
