//! Classifier strategies — lead/general verdicts with a suggested reply.
//!
//! Two interchangeable strategies sit behind one trait: a fixed-answer
//! passthrough for fixture data and a keyword heuristic for live data.
//! A future ML-backed strategy slots in the same way without touching the
//! pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod fixed;
mod keyword;

pub use fixed::FixedClassifier;
pub use keyword::KeywordClassifier;

/// Verdict for one comment: lead or general, with a rationale and a
/// suggested reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Does the comment indicate commercial/service intent?
    pub is_lead: bool,
    /// Why the verdict was reached.
    pub rationale: String,
    /// Draft response for the review workflow.
    pub suggested_reply: String,
}

impl Classification {
    /// Result returned when no classifier is configured.
    ///
    /// Classification failures never block the pipeline — absence of a
    /// classifier is a signal, not an error.
    pub fn not_configured() -> Self {
        Self {
            is_lead: false,
            rationale: "Classifier not configured".into(),
            suggested_reply: "Thanks for your comment! We'll take a look and get back to you."
                .into(),
        }
    }
}

/// Trait for classifier strategies.
///
/// Infallible by contract: a strategy absorbs its own failures (missing
/// credentials, backend errors) and always returns a usable, clearly
/// labeled [`Classification`]. One bad item can therefore never abort a
/// batch. Strategies must be deterministic with respect to the input text.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Strategy name (e.g. "fixed", "keyword").
    fn name(&self) -> &str;

    /// Classify one comment's text.
    async fn classify(&self, text: &str) -> Classification;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_is_general_with_labeled_rationale() {
        let c = Classification::not_configured();
        assert!(!c.is_lead);
        assert!(c.rationale.to_lowercase().contains("not configured"));
        assert!(!c.suggested_reply.is_empty());
    }
}
