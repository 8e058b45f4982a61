//! Shared types for the triage pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Classification;
use crate::source::RawComment;

/// Review status of a triaged comment.
///
/// Initialized to `Unread` when the pipeline creates the record; flipped
/// only by the review store's toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Unread,
    Replied,
}

impl ReviewStatus {
    /// The other status — toggling twice returns to the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unread => Self::Replied,
            Self::Replied => Self::Unread,
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unread => write!(f, "unread"),
            Self::Replied => write!(f, "replied"),
        }
    }
}

/// A comment merged with its classification plus review metadata.
///
/// `review_status` is the only field ever mutated after creation. Identity
/// is `external_id`; no two records in one loaded batch share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriagedComment {
    pub external_id: String,
    pub author_name: String,
    pub text: String,
    pub item_label: String,
    pub published_at: DateTime<Utc>,
    pub avatar_ref: String,
    pub is_lead: bool,
    pub rationale: String,
    pub suggested_reply: String,
    pub review_status: ReviewStatus,
}

impl TriagedComment {
    /// Merge a raw comment with its classification. The raw comment is
    /// consumed — it has no life after this point.
    pub fn merge(raw: RawComment, classification: Classification) -> Self {
        Self {
            external_id: raw.external_id,
            author_name: raw.author_name,
            text: raw.text,
            item_label: raw.item_label,
            published_at: raw.published_at,
            avatar_ref: raw.avatar_ref,
            is_lead: classification.is_lead,
            rationale: classification.rationale,
            suggested_reply: classification.suggested_reply,
            review_status: ReviewStatus::Unread,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawComment {
        RawComment {
            external_id: "c-1".into(),
            author_name: "Alice".into(),
            text: "Do you ship overseas?".into(),
            item_label: "Launch video".into(),
            published_at: Utc::now(),
            avatar_ref: "https://example.com/a.jpg".into(),
        }
    }

    #[test]
    fn merge_initializes_unread() {
        let merged = TriagedComment::merge(
            raw(),
            Classification {
                is_lead: true,
                rationale: "shipping inquiry".into(),
                suggested_reply: "Yes we do!".into(),
            },
        );
        assert_eq!(merged.review_status, ReviewStatus::Unread);
        assert!(merged.is_lead);
        assert_eq!(merged.external_id, "c-1");
        assert_eq!(merged.author_name, "Alice");
    }

    #[test]
    fn toggle_is_involution() {
        let status = ReviewStatus::Unread;
        assert_eq!(status.toggled().toggled(), status);
        assert_eq!(ReviewStatus::Replied.toggled(), ReviewStatus::Unread);
    }

    #[test]
    fn review_status_display() {
        assert_eq!(ReviewStatus::Unread.to_string(), "unread");
        assert_eq!(ReviewStatus::Replied.to_string(), "replied");
    }

    #[test]
    fn review_status_serializes_snake_case() {
        let json = serde_json::to_value(ReviewStatus::Replied).unwrap();
        assert_eq!(json, "replied");
    }
}
