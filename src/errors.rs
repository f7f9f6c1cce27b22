//! Error types for the listing pipeline
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Main error type for all pipeline operations
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An event was not accepted in the current step
    #[error("Transition rejected: {0}")]
    TransitionRejected(String),

    /// The injected submit function reported a failure
    #[error("Submission failed: {0}")]
    SubmitFailed(String),

    /// Operation timed out
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A value does not name a known answer
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl PipelineError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::TransitionRejected(_) => "TRANSITION_REJECTED",
            PipelineError::SubmitFailed(_) => "SUBMIT_FAILED",
            PipelineError::Timeout(_) => "TIMEOUT",
            PipelineError::ConfigError(_) => "CONFIG_ERROR",
            PipelineError::InvalidJson(_) => "INVALID_JSON",
            PipelineError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            PipelineError::FileNotFound(_) => "FILE_NOT_FOUND",
            PipelineError::Io(_) => "IO_ERROR",
            PipelineError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        PipelineError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &PipelineError) -> i32 {
    match error {
        PipelineError::ConfigError(_)
        | PipelineError::InvalidJson(_)
        | PipelineError::SchemaValidation(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PipelineError::TransitionRejected("test".into()).code(),
            "TRANSITION_REJECTED"
        );
        assert_eq!(PipelineError::SubmitFailed("test".into()).code(), "SUBMIT_FAILED");
        assert_eq!(PipelineError::Timeout("test".into()).code(), "TIMEOUT");
        assert_eq!(PipelineError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(PipelineError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(PipelineError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(
            PipelineError::SchemaValidation("test".into()).code(),
            "SCHEMA_VALIDATION"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&PipelineError::ConfigError("bad".into())), 2);
        assert_eq!(to_exit_code(&PipelineError::InvalidJson("bad".into())), 2);
        assert_eq!(to_exit_code(&PipelineError::SubmitFailed("test".into())), 1);
        assert_eq!(to_exit_code(&PipelineError::Timeout("test".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = PipelineError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
