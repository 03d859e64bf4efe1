//! Errors raised by this crate's own fallible operations.
//!
//! Annotation and extraction never fail. Only loading configuration and the
//! CLI's I/O produce these.

use std::path::PathBuf;

/// Specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CallsiteErrorKind {
    /// Configuration could not be read or parsed
    #[display("Configuration error: {}", _0)]
    Config(String),

    /// Reading or writing a stream failed
    #[display("I/O error: {} ({})", path.display(), message)]
    Io {
        /// Path being read, `-` for standard streams
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// A builder was missing a required field
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Error with the location where it was raised.
///
/// # Examples
///
/// ```
/// use callsite_error::{CallsiteError, CallsiteErrorKind};
///
/// let err = CallsiteError::new(CallsiteErrorKind::Config("missing suffixes".into()));
/// assert!(err.to_string().starts_with("Callsite Error: Configuration error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Callsite Error: {} at line {} in {}", kind, line, file)]
pub struct CallsiteError {
    kind: CallsiteErrorKind,
    line: u32,
    file: &'static str,
}

impl CallsiteError {
    /// Create a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: CallsiteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CallsiteErrorKind {
        &self.kind
    }

    /// Line where the error was raised.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was raised.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl From<CallsiteErrorKind> for CallsiteError {
    #[track_caller]
    fn from(kind: CallsiteErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for fallible callsite operations.
pub type CallsiteResult<T> = std::result::Result<T, CallsiteError>;
