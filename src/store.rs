//! Review state store — in-memory collection of triaged comments.
//!
//! The single mutable shared resource of the core. All mutation goes
//! through `replace_all` and `toggle_replied`; the presentation layer only
//! reads filtered views and issues toggle commands.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::pipeline::{ReviewStatus, TriagedComment};

/// Status filter for [`ReviewStore::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Unread,
    Replied,
    Any,
}

impl StatusFilter {
    fn matches(self, status: ReviewStatus) -> bool {
        match self {
            Self::Unread => status == ReviewStatus::Unread,
            Self::Replied => status == ReviewStatus::Replied,
            Self::Any => true,
        }
    }
}

/// Lead filter for [`ReviewStore::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFilter {
    LeadsOnly,
    Any,
}

impl LeadFilter {
    fn matches(self, is_lead: bool) -> bool {
        match self {
            Self::LeadsOnly => is_lead,
            Self::Any => true,
        }
    }
}

/// In-memory review state store.
///
/// Contents always reflect one coherent source snapshot: a reload replaces
/// the whole collection in one write-lock critical section, so concurrent
/// reads see either the prior batch in full or the new one, never a mix.
pub struct ReviewStore {
    comments: RwLock<Vec<TriagedComment>>,
}

impl ReviewStore {
    /// Create an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            comments: RwLock::new(Vec::new()),
        })
    }

    /// Atomically discard current contents and install `batch`.
    ///
    /// Called after every successful pipeline run. Never merges with stale
    /// entries.
    pub async fn replace_all(&self, batch: Vec<TriagedComment>) {
        let count = batch.len();
        let mut comments = self.comments.write().await;
        *comments = batch;
        info!(count, "Store contents replaced");
    }

    /// Flip a comment's status between unread and replied.
    ///
    /// Returns `true` if the id was found. An absent id is a no-op, not an
    /// error — a toggle racing a reload must not crash the caller.
    pub async fn toggle_replied(&self, id: &str) -> bool {
        let mut comments = self.comments.write().await;
        match comments.iter_mut().find(|c| c.external_id == id) {
            Some(comment) => {
                comment.review_status = comment.review_status.toggled();
                debug!(id, status = %comment.review_status, "Review status toggled");
                true
            }
            None => {
                debug!(id, "Toggle for absent id — no-op");
                false
            }
        }
    }

    /// Records matching both filters, in insertion order.
    ///
    /// Pure read of the live contents at call time.
    pub async fn view(&self, status: StatusFilter, lead: LeadFilter) -> Vec<TriagedComment> {
        let comments = self.comments.read().await;
        comments
            .iter()
            .filter(|c| status.matches(c.review_status) && lead.matches(c.is_lead))
            .cloned()
            .collect()
    }

    /// Count records matching a predicate.
    ///
    /// Derived on demand, never cached — a stored count could drift from
    /// the underlying records.
    pub async fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&TriagedComment) -> bool,
    {
        let comments = self.comments.read().await;
        comments.iter().filter(|c| predicate(c)).count()
    }

    /// Badge count: unread leads awaiting review.
    pub async fn unread_lead_count(&self) -> usize {
        self.count(|c| c.is_lead && c.review_status == ReviewStatus::Unread)
            .await
    }

    /// Total number of records.
    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}
