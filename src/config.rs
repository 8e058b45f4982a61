//! Configuration types.
//!
//! Configuration is an explicitly passed value threaded into the pipeline
//! and source adapters at call time — never ambient global state. Durable
//! storage of credentials belongs to the external settings collaborator;
//! this crate only receives them.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Which comment source a triage run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Fixed offline seed dataset — no network, no credentials needed.
    Fixture,
    /// Live paginated comment-listing query.
    Remote,
}

impl SourceMode {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::Remote => "remote",
        }
    }

    /// Parse a mode from its configuration string.
    ///
    /// Anything other than "fixture" or "remote" is a reported
    /// misconfiguration, never a silent fallback.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw {
            "fixture" => Ok(Self::Fixture),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::InvalidValue {
                key: "mode".into(),
                message: format!("'{other}' is not a mode (expected \"fixture\" or \"remote\")"),
            }),
        }
    }
}

/// Triage configuration supplied by the external settings collaborator.
///
/// All fields are optional: fixture mode works with none of them, remote
/// mode requires `source_credential` and `source_channel_id` and reports
/// their absence as a [`ConfigError`] rather than silently falling back.
#[derive(Debug, Clone, Default)]
pub struct TriageConfig {
    /// Access credential for the comment-listing endpoint.
    pub source_credential: Option<SecretString>,
    /// Channel identifier scoping the comment listing.
    pub source_channel_id: Option<String>,
    /// Credential for the classifier backend. Its absence is not an error:
    /// the classifier falls back to its "not configured" branch.
    pub classifier_credential: Option<SecretString>,
}

impl TriageConfig {
    /// Validate the remote-mode prerequisites.
    ///
    /// Returns the credential and channel id, or the first missing key as a
    /// typed error. Called before any network activity.
    pub fn require_remote(&self) -> Result<(&SecretString, &str), ConfigError> {
        let credential = self.source_credential.as_ref().ok_or_else(|| {
            ConfigError::missing(
                "source_credential",
                "Set LEAD_TRIAGE_SOURCE_KEY or configure it in settings.",
            )
        })?;
        let channel_id = self.source_channel_id.as_deref().ok_or_else(|| {
            ConfigError::missing(
                "source_channel_id",
                "Set LEAD_TRIAGE_CHANNEL_ID or configure it in settings.",
            )
        })?;
        Ok((credential, channel_id))
    }

    /// Whether remote mode can run with this configuration.
    pub fn remote_ready(&self) -> bool {
        self.require_remote().is_ok()
    }
}
