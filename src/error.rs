//! Unified error types for chatledger.
//!
//! This module provides a single [`ChatledgerError`] enum that covers all
//! error cases in the library. Typed variants let library users match on
//! failure modes while keeping messages actionable for application users.
//!
//! Note that the extraction engine itself never fails on malformed chat
//! content: unrecognized lines simply yield no records. Errors here are
//! reserved for invocation-level problems (missing files, bad encodings,
//! output serialization).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatledger operations.
///
/// # Example
///
/// ```rust
/// use chatledger::error::Result;
/// use chatledger::TransactionRecord;
///
/// fn my_function() -> Result<Vec<TransactionRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatledgerError>;

/// The error type for all chatledger operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatledgerError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to process a transcript.
    ///
    /// Contains a description of the problem and optionally the file path.
    #[error("Failed to parse transcript{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The input doesn't match the expected structure.
    ///
    /// Raised for invocation-level contract violations, for example a
    /// configured extra unit word that is not purely alphabetic.
    #[error("Invalid {what}: {message}")]
    InvalidFormat {
        /// What was being validated
        what: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when transcript or output content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatledgerError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatledgerError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatledgerError {
    /// Creates a transcript parse error.
    pub fn parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatledgerError::Parse {
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(what: &'static str, message: impl Into<String>) -> Self {
        ChatledgerError::InvalidFormat {
            what,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatledgerError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatledgerError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatledgerError::InvalidFormat { .. })
    }
}
