//! Core error types for Orin using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for Orin operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid scroll config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("TOML parse error: {reason}")]
    ConfigParseFailed { reason: String },

    // Section lookup
    #[error("unknown section: {0}")]
    UnknownSection(String),

    // Form validation
    #[error("email address is required")]
    EmptyEmail,

    #[error("JSON serialization failed: {reason}")]
    JsonSerializeFailed { reason: String },
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = Error::invalid_config("noise_floor", "must be finite");
        assert_eq!(
            err.to_string(),
            "invalid scroll config: noise_floor must be finite"
        );
    }

    #[test]
    fn test_unknown_section_display() {
        let err = Error::UnknownSection("contact".to_string());
        assert!(err.to_string().contains("contact"));
    }
}
