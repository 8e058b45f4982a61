//! Triage pipeline — orchestrates fetch + classify as one unit of work.
//!
//! Flow:
//! 1. Source fetches one batch of raw comments
//! 2. Classification fans out over all items, joined in input order
//! 3. Each raw comment merges with its verdict into a `TriagedComment`
//!
//! A source failure surfaces without partial output; the store never sees
//! an incomplete batch. Classifier calls cannot fail at this layer — the
//! strategy contract absorbs per-item failures (see `classifier`).

use std::sync::Arc;

use futures::future;
use tracing::{debug, info};

use crate::classifier::{Classifier, FixedClassifier, KeywordClassifier};
use crate::config::{SourceMode, TriageConfig};
use crate::error::{ConfigError, Result};
use crate::pipeline::types::TriagedComment;
use crate::source::{CommentSource, FixtureSource, RemoteSource, canned_answers};
use crate::store::ReviewStore;

/// The triage pipeline: one source, one classifier strategy.
pub struct TriagePipeline {
    source: Arc<dyn CommentSource>,
    classifier: Arc<dyn Classifier>,
}

impl TriagePipeline {
    /// Create a pipeline from explicit collaborators (used by tests and by
    /// callers wiring custom strategies).
    pub fn new(source: Arc<dyn CommentSource>, classifier: Arc<dyn Classifier>) -> Self {
        Self { source, classifier }
    }

    /// Wire the standard source/classifier pair for a mode.
    ///
    /// Fixture mode pairs the seed source with the fixed-answer
    /// passthrough. Remote mode pairs the listing query with the keyword
    /// heuristic and fails fast here — before any network activity — if
    /// the source credential or channel id is missing.
    pub fn for_mode(mode: SourceMode, config: &TriageConfig) -> std::result::Result<Self, ConfigError> {
        match mode {
            SourceMode::Fixture => Ok(Self::new(
                Arc::new(FixtureSource::new()),
                Arc::new(FixedClassifier::new(canned_answers())),
            )),
            SourceMode::Remote => {
                let source = RemoteSource::from_config(config)?;
                let classifier =
                    KeywordClassifier::new(config.classifier_credential.is_some());
                Ok(Self::new(Arc::new(source), Arc::new(classifier)))
            }
        }
    }

    /// Run one triage batch: fetch, fan-out classify, merge.
    ///
    /// Classification calls run concurrently and are joined in input
    /// order, so the output batch preserves source ordering.
    pub async fn run(&self) -> Result<Vec<TriagedComment>> {
        info!(
            source = self.source.name(),
            classifier = self.classifier.name(),
            "Starting triage run"
        );

        let batch = self.source.fetch_batch().await?;
        debug!(count = batch.len(), "Batch fetched, classifying");

        let verdicts =
            future::join_all(batch.iter().map(|c| self.classifier.classify(&c.text))).await;

        let triaged: Vec<TriagedComment> = batch
            .into_iter()
            .zip(verdicts)
            .map(|(raw, classification)| TriagedComment::merge(raw, classification))
            .collect();

        info!(
            count = triaged.len(),
            leads = triaged.iter().filter(|c| c.is_lead).count(),
            "Triage run complete"
        );
        Ok(triaged)
    }

    /// Run one batch and install it in the store.
    ///
    /// All-or-nothing: the store is only touched after the whole batch is
    /// ready. Overlapping runs are not cancelled; `replace_all` applies in
    /// completion order, so the last run to finish wins.
    pub async fn run_into(&self, store: &ReviewStore) -> Result<usize> {
        let batch = self.run().await?;
        let count = batch.len();
        store.replace_all(batch).await;
        Ok(count)
    }
}
