//! Error types for NurseForge

use thiserror::Error;

/// Main error type for NurseForge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NurseForgeError {
    /// The flat schedule does not have the length the model expects.
    ///
    /// Raised before any counting happens; the schedule is never truncated
    /// or padded.
    #[error("Validation error: schedule length must be {expected}, got {actual}")]
    Validation { expected: usize, actual: usize },

    /// Error in model configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NurseForgeError {
    /// Creates a configuration error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        NurseForgeError::Config(message.into())
    }

    /// Returns true if this error rejects a candidate schedule
    /// (as opposed to a broken model).
    pub fn is_validation(&self) -> bool {
        matches!(self, NurseForgeError::Validation { .. })
    }
}

/// Result type alias for NurseForge operations
pub type Result<T> = std::result::Result<T, NurseForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = NurseForgeError::Validation {
            expected: 21,
            actual: 20,
        };
        assert_eq!(
            err.to_string(),
            "Validation error: schedule length must be 21, got 20"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_config_message() {
        let err = NurseForgeError::config("empty roster");
        assert_eq!(err.to_string(), "Configuration error: empty roster");
        assert!(!err.is_validation());
    }
}
