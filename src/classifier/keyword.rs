//! Keyword-heuristic classifier for live data.

use async_trait::async_trait;
use tracing::debug;

use super::{Classification, Classifier};

/// Default trigger-word set: intent verbs and request words.
///
/// The set is configuration, not hard-coded policy — callers can supply
/// their own via [`KeywordClassifier::with_triggers`].
pub const DEFAULT_TRIGGER_WORDS: &[&str] = &[
    "buy", "sell", "price", "cost", "purchase", "order", "quote", "help", "contact", "interested",
];

/// Rationale attached when a trigger word matched.
const RATIONALE_MATCH: &str = "Keyword match";

/// Rationale attached when no trigger word matched.
const RATIONALE_NO_MATCH: &str = "No keyword match";

/// Placeholder suggested reply, identical regardless of verdict.
///
/// Deliberate policy, not a bug: until a generative backend is wired in,
/// every live comment gets the same template and the human reviewer edits
/// it before sending.
const REPLY_TEMPLATE: &str =
    "Thanks for reaching out! We'd love to help — could you share a few more details?";

/// Keyword-heuristic classifier.
///
/// Lower-cases the text and flags it as a lead iff it contains at least one
/// trigger word. Deterministic for a given trigger set.
pub struct KeywordClassifier {
    triggers: Vec<String>,
    /// False when no classifier credential was supplied; classify then
    /// short-circuits to the "not configured" result.
    configured: bool,
}

impl KeywordClassifier {
    /// Create a classifier with the default trigger set.
    ///
    /// `configured` reflects whether a classifier credential is present.
    pub fn new(configured: bool) -> Self {
        Self::with_triggers(
            DEFAULT_TRIGGER_WORDS.iter().map(|w| w.to_string()).collect(),
            configured,
        )
    }

    /// Create a classifier with a custom trigger set.
    pub fn with_triggers(triggers: Vec<String>, configured: bool) -> Self {
        let triggers = triggers.into_iter().map(|w| w.to_lowercase()).collect();
        Self {
            triggers,
            configured,
        }
    }

    /// The active trigger-word set (lower-cased).
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, text: &str) -> Classification {
        if !self.configured {
            debug!("Keyword classifier unconfigured — returning absence result");
            return Classification::not_configured();
        }

        let lowered = text.to_lowercase();
        let matched = self.triggers.iter().find(|w| lowered.contains(w.as_str()));

        let is_lead = matched.is_some();
        debug!(
            is_lead,
            trigger = matched.map(String::as_str).unwrap_or("none"),
            "Keyword classification"
        );

        Classification {
            is_lead,
            rationale: if is_lead {
                RATIONALE_MATCH.into()
            } else {
                RATIONALE_NO_MATCH.into()
            },
            suggested_reply: REPLY_TEMPLATE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_word_yields_lead() {
        let classifier = KeywordClassifier::new(true);
        let result = classifier.classify("Where can I buy this?").await;
        assert!(result.is_lead);
        assert_eq!(result.rationale, "Keyword match");
    }

    #[tokio::test]
    async fn trigger_match_is_case_insensitive() {
        let classifier = KeywordClassifier::new(true);
        let result = classifier.classify("PLEASE HELP ME WITH SETUP").await;
        assert!(result.is_lead);
    }

    #[tokio::test]
    async fn no_trigger_yields_general() {
        let classifier = KeywordClassifier::new(true);
        let result = classifier.classify("Great video, loved the editing!").await;
        assert!(!result.is_lead);
        assert_eq!(result.rationale, "No keyword match");
    }

    #[tokio::test]
    async fn reply_template_identical_for_both_verdicts() {
        let classifier = KeywordClassifier::new(true);
        let lead = classifier.classify("what's the price?").await;
        let general = classifier.classify("nice one").await;
        assert_eq!(lead.suggested_reply, general.suggested_reply);
    }

    #[tokio::test]
    async fn unconfigured_returns_absence_result_not_error() {
        let classifier = KeywordClassifier::new(false);
        // Text that would otherwise match a trigger word.
        let result = classifier.classify("I want to buy one").await;
        assert!(!result.is_lead);
        assert!(result.rationale.contains("not configured"));
    }

    #[tokio::test]
    async fn custom_trigger_set_respected() {
        let classifier =
            KeywordClassifier::with_triggers(vec!["Demo".into(), "trial".into()], true);
        assert!(classifier.classify("can I get a demo?").await.is_lead);
        assert!(!classifier.classify("can I buy one?").await.is_lead);
    }

    #[tokio::test]
    async fn classification_is_deterministic() {
        let classifier = KeywordClassifier::new(true);
        let a = classifier.classify("need help with sizing").await;
        let b = classifier.classify("need help with sizing").await;
        assert_eq!(a, b);
    }

    #[test]
    fn default_triggers_are_lowercased() {
        let classifier = KeywordClassifier::new(true);
        assert!(classifier.triggers().iter().all(|w| *w == w.to_lowercase()));
        assert!(classifier.triggers().contains(&"buy".to_string()));
        assert!(classifier.triggers().contains(&"contact".to_string()));
    }
}
