//! Fixed-answer classifier for fixture data.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{Classification, Classifier};

/// Fixed-answer classifier — a passthrough, not active analysis.
///
/// Fixture comments ship with canned verdicts; this strategy looks the
/// verdict up by comment text. Unknown text falls back to the labeled
/// "not configured" result so the trait's never-fail contract holds.
pub struct FixedClassifier {
    answers: HashMap<String, Classification>,
}

impl FixedClassifier {
    /// Create a classifier from a text → classification map.
    pub fn new(answers: HashMap<String, Classification>) -> Self {
        Self { answers }
    }
}

#[async_trait]
impl Classifier for FixedClassifier {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn classify(&self, text: &str) -> Classification {
        match self.answers.get(text) {
            Some(answer) => answer.clone(),
            None => {
                debug!("No canned answer for text — falling back to absence result");
                Classification::not_configured()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> FixedClassifier {
        let mut answers = HashMap::new();
        answers.insert(
            "Do you sell these?".to_string(),
            Classification {
                is_lead: true,
                rationale: "Asks about purchasing".into(),
                suggested_reply: "We do! Check the link in the description.".into(),
            },
        );
        FixedClassifier::new(answers)
    }

    #[tokio::test]
    async fn known_text_returns_canned_answer() {
        let result = classifier().classify("Do you sell these?").await;
        assert!(result.is_lead);
        assert_eq!(result.rationale, "Asks about purchasing");
    }

    #[tokio::test]
    async fn unknown_text_falls_back_without_error() {
        let result = classifier().classify("never seen this").await;
        assert!(!result.is_lead);
        assert!(result.rationale.contains("not configured"));
    }

    #[tokio::test]
    async fn passthrough_is_deterministic() {
        let c = classifier();
        let a = c.classify("Do you sell these?").await;
        let b = c.classify("Do you sell these?").await;
        assert_eq!(a, b);
    }
}
