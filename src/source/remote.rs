//! Remote comment source — queries the live comment-listing endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::config::TriageConfig;
use crate::error::{ConfigError, SourceError};

use super::{CommentSource, RawComment};

/// Comment-listing API base.
const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Fixed page size per batch.
const PAGE_SIZE: u32 = 10;

/// Placeholder label for the parent content item.
///
/// The listing endpoint returns only a video id, not a human-readable
/// title, so the adapter substitutes this documented placeholder rather
/// than leaving the label blank.
const UNKNOWN_ITEM_LABEL: &str = "unknown source item";

/// Remote source — one authenticated GET per batch against the paginated
/// comment-listing endpoint.
#[derive(Debug)]
pub struct RemoteSource {
    credential: SecretString,
    channel_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    /// Build a remote source from configuration.
    ///
    /// Fails fast with a typed [`ConfigError`] if the credential or channel
    /// identifier is absent — no network call is ever attempted with an
    /// incomplete configuration.
    pub fn from_config(config: &TriageConfig) -> Result<Self, ConfigError> {
        let (credential, channel_id) = config.require_remote()?;
        Ok(Self {
            credential: credential.clone(),
            channel_id: channel_id.to_string(),
            base_url: API_BASE.to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// Override the API base (for tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn listing_url(&self) -> String {
        format!("{}/commentThreads", self.base_url)
    }

    /// Interpret one listing response body.
    ///
    /// A signaled `error` payload is a remote-error condition, not a
    /// crash; a body without an `items` array is malformed. Item order is
    /// preserved as returned; no re-sorting.
    fn parse_listing(data: &serde_json::Value) -> Result<Vec<RawComment>, SourceError> {
        if let Some(error) = data.get("error") {
            let message = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unspecified remote error")
                .to_string();
            warn!(message = %message, "Comment listing signaled an error");
            return Err(SourceError::Remote { message });
        }

        let items = data
            .get("items")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| SourceError::InvalidResponse("missing items array".into()))?;

        Ok(items.iter().filter_map(Self::map_item).collect())
    }

    /// Map one listing item to a [`RawComment`].
    ///
    /// Returns `None` for items without a comment body (e.g. held for
    /// moderation) — these are skipped, not fatal.
    fn map_item(item: &serde_json::Value) -> Option<RawComment> {
        let external_id = item.get("id").and_then(serde_json::Value::as_str)?;
        let snippet = item
            .get("snippet")
            .and_then(|s| s.get("topLevelComment"))
            .and_then(|c| c.get("snippet"))?;

        let text = snippet
            .get("textOriginal")
            .or_else(|| snippet.get("textDisplay"))
            .and_then(serde_json::Value::as_str)?;

        let author_name = snippet
            .get("authorDisplayName")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown");

        let avatar_ref = snippet
            .get("authorProfileImageUrl")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();

        let published_at = snippet
            .get("publishedAt")
            .and_then(serde_json::Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Some(RawComment {
            external_id: external_id.to_string(),
            author_name: author_name.to_string(),
            text: text.to_string(),
            item_label: UNKNOWN_ITEM_LABEL.to_string(),
            published_at,
            avatar_ref: avatar_ref.to_string(),
        })
    }
}

#[async_trait]
impl CommentSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch_batch(&self) -> Result<Vec<RawComment>, SourceError> {
        let page_size = PAGE_SIZE.to_string();
        let resp = self
            .client
            .get(self.listing_url())
            .query(&[
                ("part", "snippet"),
                ("allThreadsRelatedToChannelId", self.channel_id.as_str()),
                ("maxResults", page_size.as_str()),
                ("key", self.credential.expose_secret()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SourceError::Http(format!(
                "comment listing returned {}",
                resp.status()
            )));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let batch = Self::parse_listing(&data)?;
        debug!(
            count = batch.len(),
            channel = %self.channel_id,
            "Remote batch fetched"
        );
        Ok(batch)
    }
}
