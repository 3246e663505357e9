//! Unified error types for cloud-deps.
//!
//! Library code returns [`CloudDepsError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cloud-deps operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CloudDepsError {
    /// Errors talking to the provider detection endpoint
    #[error("Cloud provider detection failed: {context}")]
    Detection {
        context: String,
        #[source]
        source: DetectionErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific detection error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DetectionErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Convenient Result type for cloud-deps operations
pub type Result<T> = std::result::Result<T, CloudDepsError>;

impl CloudDepsError {
    /// Create a detection error with context
    pub fn detection(context: impl Into<String>, source: DetectionErrorKind) -> Self {
        Self::Detection {
            context: context.into(),
            source,
        }
    }

    /// Create a detection error for an input that is not a parsable URL
    pub fn invalid_url(input: impl Into<String>) -> Self {
        Self::detection(
            "normalizing input",
            DetectionErrorKind::InvalidUrl(input.into()),
        )
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for CloudDepsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CloudDepsError {
    fn from(err: serde_json::Error) -> Self {
        Self::detection(
            "JSON deserialization",
            DetectionErrorKind::InvalidResponse(err.to_string()),
        )
    }
}

impl From<url::ParseError> for CloudDepsError {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_url(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// ```ignore
/// use cloud_deps::error::ErrorContext;
///
/// let body = std::fs::read_to_string(path).context("reading config")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<CloudDepsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }
}

/// Prepend `ctx` to the error's existing context chain.
fn add_context_to_error(err: CloudDepsError, ctx: &str) -> CloudDepsError {
    match err {
        CloudDepsError::Detection { context, source } => CloudDepsError::Detection {
            context: format!("{ctx}: {context}"),
            source,
        },
        CloudDepsError::Io {
            path,
            message,
            source,
        } => CloudDepsError::Io {
            path,
            message: format!("{ctx}: {message}"),
            source,
        },
        CloudDepsError::Config(msg) => CloudDepsError::Config(format!("{ctx}: {msg}")),
        CloudDepsError::Validation(msg) => CloudDepsError::Validation(format!("{ctx}: {msg}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_error_display() {
        let err = CloudDepsError::detection(
            "POST /api/detect-cloud",
            DetectionErrorKind::ApiError("status 500".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Cloud provider detection failed: POST /api/detect-cloud"
        );
        assert!(matches!(
            err,
            CloudDepsError::Detection {
                source: DetectionErrorKind::ApiError(_),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_url_kind() {
        let err = CloudDepsError::invalid_url("https://");
        assert!(matches!(
            err,
            CloudDepsError::Detection {
                source: DetectionErrorKind::InvalidUrl(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chaining() {
        let result: std::result::Result<(), CloudDepsError> =
            Err(CloudDepsError::config("bad endpoint"));
        let err = result.context("loading config").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: loading config: bad endpoint"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CloudDepsError = io.into();
        assert!(matches!(err, CloudDepsError::Io { path: None, .. }));
    }
}
