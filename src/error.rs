//! Error types for the triage core.
//!
//! Everything here is a value reported upward to the triggering caller —
//! nothing in the core aborts the process. Classifier strategies absorb
//! their own failures (see `classifier::Classifier`) and never appear in
//! this taxonomy.

/// Top-level error type for the triage core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Configuration-related errors.
///
/// Raised before any network activity is attempted — a missing credential
/// must never turn into a failed HTTP call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Convenience constructor for a missing key with a remediation hint.
    pub fn missing(key: &str, hint: &str) -> Self {
        Self::MissingRequired {
            key: key.into(),
            hint: hint.into(),
        }
    }
}

/// Comment source errors — transport failures and signaled remote errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Remote listing signaled an error: {message}")]
    Remote { message: String },

    #[error("Invalid response from comment listing: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Result type alias for the triage core.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_includes_key_and_hint() {
        let err = ConfigError::missing("source_credential", "Set LEAD_TRIAGE_SOURCE_KEY.");
        let msg = err.to_string();
        assert!(msg.contains("source_credential"));
        assert!(msg.contains("LEAD_TRIAGE_SOURCE_KEY"));
    }

    #[test]
    fn source_error_wraps_into_top_level() {
        let err: Error = SourceError::Remote {
            message: "quota exceeded".into(),
        }
        .into();
        assert!(matches!(err, Error::Source(SourceError::Remote { .. })));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
