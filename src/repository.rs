//! ContentRepository port: where experience rows come from.
//!
//! Adapters live in [`supabase`](crate::supabase) (hosted PostgREST) and
//! [`fixture`](crate::fixture) (local JSON file).

use crate::content::RawContentRow;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// `ILIKE` pattern used to select experience rows.
pub const EXPERIENCE_KEY_PATTERN: &str = "experience_%";

/// Only rows with this status are published.
pub const ACTIVE_STATUS: &str = "active";

/// Errors surfaced by a content repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with an error of its own.
    #[error("{message}")]
    Store { message: String },

    /// The store answered successfully but the payload was not rows.
    #[error("Failed to decode content rows: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read fixture {path}: {details}")]
    Fixture { path: PathBuf, details: String },
}

/// Read access to published experience rows.
///
/// Implementations return rows with status `active` whose key matches
/// [`EXPERIENCE_KEY_PATTERN`], ascending by `sort_order`, with highlights and
/// tags attached. An empty vector is a valid answer.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Whether a backend is reachable at all. Loaders check this before
    /// querying and report a configuration error instead.
    fn is_configured(&self) -> bool;

    async fn fetch_experience_rows(&self) -> Result<Vec<RawContentRow>, RepositoryError>;
}
