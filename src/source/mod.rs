//! Comment source adapters — pure ingestion, no business logic.
//!
//! Adapters normalize raw comments from their origin (fixture seed or live
//! listing query) into [`RawComment`]. Classification and review state live
//! elsewhere; a source only fetches.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

mod fixture;
mod remote;

pub use fixture::{FixtureSource, canned_answers};
pub use remote::RemoteSource;

/// One inbound comment as retrieved from a source, before classification.
///
/// Immutable; discarded after the pipeline merges it into a
/// `TriagedComment`. `external_id` is unique within one retrieval batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    /// Source-native comment id.
    pub external_id: String,
    /// Display name of the comment author.
    pub author_name: String,
    /// Comment body.
    pub text: String,
    /// Label of the content item the comment was left on.
    pub item_label: String,
    /// When the comment was published.
    pub published_at: DateTime<Utc>,
    /// Reference to the author's avatar image.
    pub avatar_ref: String,
}

/// Trait for comment sources.
///
/// One call fetches one complete batch. Ordering of the underlying source
/// is preserved — no re-sorting.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Source name (e.g. "fixture", "remote").
    fn name(&self) -> &str;

    /// Fetch one batch of raw comments.
    async fn fetch_batch(&self) -> Result<Vec<RawComment>, SourceError>;
}
