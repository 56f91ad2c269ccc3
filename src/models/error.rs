//! Error types for quizmaker.
//!
//! Taxonomy:
//! - Rejected input: invalid selection or setting, bad configuration
//! - Generation failure: service status, network, timeout, unreadable body
//! - Output: writing exported files
//!
//! Catalog lookups never produce errors; misses degrade to empty lists.

use crate::selection::Level;
use thiserror::Error;

/// Top-level error type for quizmaker.
#[derive(Debug, Error)]
pub enum QuizmakerError {
    // ═══════════════════════════════════════════════════════════════════
    // Rejected input
    // ═══════════════════════════════════════════════════════════════════

    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("'{value}' is not a selectable {level} option")]
    InvalidSelection { level: Level, value: String },

    // ═══════════════════════════════════════════════════════════════════
    // Generation failure
    // ═══════════════════════════════════════════════════════════════════

    #[error("Generation service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Parse error: {0}")]
    Parse(String),

    // ═══════════════════════════════════════════════════════════════════
    // Output
    // ═══════════════════════════════════════════════════════════════════

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Generation service specific errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service responded with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl QuizmakerError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error belongs to the single "generation failed" path.
    ///
    /// Status codes, timeouts, transport and body errors are not told apart
    /// from each other by callers.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::Service(_) | Self::Network(_) | Self::Timeout(_) | Self::Parse(_)
        )
    }
}

/// Result type alias for quizmaker.
pub type Result<T> = std::result::Result<T, QuizmakerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_generation_failures_collapse() {
        let status = QuizmakerError::Service(ServiceError::Status {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(status.is_generation_failure());
        assert!(QuizmakerError::Timeout(Duration::from_secs(1)).is_generation_failure());
        assert!(QuizmakerError::Parse("bad".to_string()).is_generation_failure());

        let selection = QuizmakerError::InvalidSelection {
            level: Level::Main,
            value: "x".to_string(),
        };
        assert!(!selection.is_generation_failure());
        assert!(!QuizmakerError::InvalidInput("x".to_string()).is_generation_failure());
    }

    #[test]
    fn test_invalid_selection_message() {
        let err = QuizmakerError::InvalidSelection {
            level: Level::Sub,
            value: "9. 없음".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'9. 없음' is not a selectable sub criterion option"
        );
    }
}
