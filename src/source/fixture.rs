//! Fixture comment source — deterministic offline seed data.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::classifier::Classification;
use crate::error::SourceError;

use super::{CommentSource, RawComment};

/// Build a seed timestamp. All seed dates are literal and valid; UTC has
/// no ambiguous local times.
fn seed_time(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid seed date")
}

/// Fixture source — a fixed seed batch for demo and testing without
/// network access or credentials.
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    /// The seed batch, paired with the canned verdict for each comment.
    ///
    /// Verdicts vary across the set so the review view has something to
    /// filter on. The fixed-answer classifier consumes the same pairs via
    /// [`canned_answers`].
    fn seed() -> Vec<(RawComment, Classification)> {
        vec![
            (
                RawComment {
                    external_id: "fx-001".into(),
                    author_name: "Sarah Jenkins".into(),
                    text: "This looks amazing! Do you ship to Canada? I'd love to buy one for my studio.".into(),
                    item_label: "Spring lookbook reveal".into(),
                    published_at: seed_time(2024, 3, 14, 9, 30),
                    avatar_ref: "https://i.pravatar.cc/150?u=sarah.jenkins".into(),
                },
                Classification {
                    is_lead: true,
                    rationale: "Asks about shipping and purchasing".into(),
                    suggested_reply: "Hi Sarah! Yes, we ship to Canada — I'll DM you the details."
                        .into(),
                },
            ),
            (
                RawComment {
                    external_id: "fx-002".into(),
                    author_name: "Mike_Gaming_99".into(),
                    text: "First! Great video as always, the editing keeps getting better.".into(),
                    item_label: "Spring lookbook reveal".into(),
                    published_at: seed_time(2024, 3, 14, 9, 31),
                    avatar_ref: "https://i.pravatar.cc/150?u=mike.gaming.99".into(),
                },
                Classification {
                    is_lead: false,
                    rationale: "General appreciation, no purchase intent".into(),
                    suggested_reply: "Thanks Mike, glad you enjoyed it!".into(),
                },
            ),
            (
                RawComment {
                    external_id: "fx-003".into(),
                    author_name: "David Chen".into(),
                    text: "What would a bulk order of 50 units cost? We're outfitting a new office.".into(),
                    item_label: "Workshop tour".into(),
                    published_at: seed_time(2024, 3, 13, 18, 5),
                    avatar_ref: "https://i.pravatar.cc/150?u=david.chen".into(),
                },
                Classification {
                    is_lead: true,
                    rationale: "Bulk pricing inquiry".into(),
                    suggested_reply: "Hi David! Happy to put a bulk quote together — email us at sales@ and we'll sort it out.".into(),
                },
            ),
        ]
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned text → classification map for the fixed-answer classifier.
pub fn canned_answers() -> HashMap<String, Classification> {
    FixtureSource::seed()
        .into_iter()
        .map(|(comment, classification)| (comment.text, classification))
        .collect()
}

#[async_trait]
impl CommentSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch_batch(&self) -> Result<Vec<RawComment>, SourceError> {
        let batch: Vec<RawComment> = Self::seed().into_iter().map(|(c, _)| c).collect();
        debug!(count = batch.len(), "Fixture batch loaded");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_batch_is_deterministic() {
        let source = FixtureSource::new();
        let a = source.fetch_batch().await.unwrap();
        let b = source.fetch_batch().await.unwrap();
        assert_eq!(a, b);
        assert!(a.len() >= 3);
    }

    #[tokio::test]
    async fn fixture_ids_unique_within_batch() {
        let batch = FixtureSource::new().fetch_batch().await.unwrap();
        let mut ids: Vec<&str> = batch.iter().map(|c| c.external_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), batch.len());
    }

    #[test]
    fn canned_answers_cover_every_seed_comment() {
        let answers = canned_answers();
        for (comment, _) in FixtureSource::seed() {
            assert!(answers.contains_key(&comment.text));
        }
    }

    #[test]
    fn seed_timestamps_are_fixed_instants() {
        let batch: Vec<RawComment> =
            FixtureSource::seed().into_iter().map(|(c, _)| c).collect();
        assert_eq!(batch[0].published_at, seed_time(2024, 3, 14, 9, 30));
        assert_eq!(batch[1].published_at, seed_time(2024, 3, 14, 9, 31));
        assert_eq!(batch[2].published_at, seed_time(2024, 3, 13, 18, 5));
    }

    #[test]
    fn seed_verdicts_vary() {
        let seed = FixtureSource::seed();
        assert!(seed.iter().any(|(_, c)| c.is_lead));
        assert!(seed.iter().any(|(_, c)| !c.is_lead));
    }
}
