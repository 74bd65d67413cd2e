//! Error types
//!
//! Alignment itself never fails once its inputs are strings; errors only
//! surface while building options or parsing policy names.

use thiserror::Error;

/// Errors raised by option construction and parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignError {
    /// An option value is out of its accepted range
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// The option that was rejected
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A segmentation policy name did not match any known policy
    #[error("unknown segmentation policy '{0}' (expected coarse, medium or fine)")]
    UnknownPolicy(String),
}

impl AlignError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AlignError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, AlignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = AlignError::invalid("max_partitions", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "invalid configuration for `max_partitions`: must be at least 1"
        );
    }

    #[test]
    fn test_unknown_policy_display() {
        let error = AlignError::UnknownPolicy("extreme".to_string());
        assert!(error.to_string().contains("'extreme'"));
        assert!(error.to_string().contains("coarse, medium or fine"));
    }
}
