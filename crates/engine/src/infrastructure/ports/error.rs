//! Error types for port operations.

use deeper_domain::DomainError;

/// Key-value persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem or backend operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Encoding or decoding the stored document failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend cannot be reached at all (e.g. poisoned cache lock).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an Io error with operation context.
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }
}

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// The catalog document is not valid JSON of the expected shape.
    #[error("Catalog parse error: {0}")]
    Parse(String),

    #[error("Invalid catalog record: {0}")]
    Invalid(#[from] DomainError),
}

impl ContentError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn parse(message: impl ToString) -> Self {
        Self::Parse(message.to_string())
    }
}
