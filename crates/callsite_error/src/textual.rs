//! Textual annotation: locations carried in the display string.
//!
//! A message carries a location when it reads `<file>:<line>: <message>`,
//! where `<file>` (trimmed) ends in a configured source extension and
//! `<line>` (trimmed) parses as a base-10 integer. Detection is purely
//! lexical, so a message that happens to start with text like
//! `config.go:7: retry` is treated as carrying a location.

use crate::caller::{BoxError, CallerError};
use crate::config::DetectionConfig;
use crate::location::{self, TrackedCaller};
use std::error::Error;

/// A location prefix found at the start of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationPrefix<'a> {
    /// Text before the first colon, trimmed
    pub file: &'a str,
    /// Text between the first and second colon, trimmed
    pub line: &'a str,
    /// Everything after the second colon, leading whitespace removed
    pub message: &'a str,
}

/// Find a location prefix at the start of `message`.
///
/// # Examples
///
/// ```
/// use callsite_error::{split_prefix, DetectionConfig};
///
/// let config = DetectionConfig::default();
/// let prefix = split_prefix("example.go:45: another: error", &config).unwrap();
/// assert_eq!(prefix.file, "example.go");
/// assert_eq!(prefix.line, "45");
/// assert_eq!(prefix.message, "another: error");
///
/// assert!(split_prefix("example.go: some error", &config).is_none());
/// ```
pub fn split_prefix<'a>(message: &'a str, config: &DetectionConfig) -> Option<LocationPrefix<'a>> {
    let (file, rest) = message.split_once(':')?;
    let (line, remainder) = rest.split_once(':')?;
    let file = file.trim();
    let line = line.trim();

    if !config.is_source_file(file) || line.parse::<i64>().is_err() {
        return None;
    }

    Some(LocationPrefix {
        file,
        line,
        message: remainder.trim_start(),
    })
}

/// `message` without its location prefix, or unchanged if it has none.
pub fn strip_prefix<'a>(message: &'a str, config: &DetectionConfig) -> &'a str {
    split_prefix(message, config).map_or(message, |prefix| prefix.message)
}

/// An error restated with its location prefix removed.
///
/// The original error stays reachable through [`Error::source`].
#[derive(Debug, derive_more::Display)]
#[display("{}", message)]
pub struct Restated {
    message: String,
    original: BoxError,
}

impl Restated {
    /// Render `original` and drop a leading location prefix.
    pub fn new(original: impl Into<BoxError>, config: &DetectionConfig) -> Self {
        let original = original.into();
        let message = strip_prefix(&original.to_string(), config).to_string();
        Self { message, original }
    }

    /// The message without a location prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error as it was before restating.
    pub fn original(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.original
    }
}

impl Error for Restated {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.original)
    }
}

/// File and line parsed out of a message, as unconverted strings.
///
/// Both fields are empty when the message carries no location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct TextLocation {
    file: String,
    line: String,
}

impl TextLocation {
    /// Create a location from its two parts.
    pub fn new(file: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: line.into(),
        }
    }

    /// Whether a location was found.
    pub fn is_found(&self) -> bool {
        !self.file.is_empty()
    }

    /// Split into file and line.
    pub fn into_parts(self) -> (String, String) {
        (self.file, self.line)
    }
}

impl From<LocationPrefix<'_>> for TextLocation {
    fn from(prefix: LocationPrefix<'_>) -> Self {
        Self::new(prefix.file, prefix.line)
    }
}

/// Parse a location out of `message` using `config`.
pub(crate) fn locate_in(message: &str, config: &DetectionConfig) -> TextLocation {
    split_prefix(message, config)
        .map(TextLocation::from)
        .unwrap_or_default()
}

/// Annotate an error by rewriting its message with the caller's location.
///
/// An existing location prefix is replaced, never stacked.
///
/// # Examples
///
/// ```
/// use callsite_error::{extract_text_str, inject_text};
///
/// let err = inject_text("example.go:42: original error");
/// let message = err.to_string();
/// assert!(message.ends_with(": original error"));
/// assert!(!message.contains("example.go"));
/// assert!(extract_text_str(&message).file().ends_with(".rs"));
/// ```
#[track_caller]
pub fn inject_text<E: Into<BoxError>>(err: E) -> CallerError {
    let site = location::resolve(&TrackedCaller, std::panic::Location::caller());
    CallerError::at(site, Restated::new(err, DetectionConfig::builtin()))
}

/// [`inject_text`] over an optional error; `None` stays `None`.
#[track_caller]
pub fn inject_text_opt<E: Into<BoxError>>(err: Option<E>) -> Option<CallerError> {
    let tracked = std::panic::Location::caller();
    err.map(|e| {
        CallerError::at(
            location::resolve(&TrackedCaller, tracked),
            Restated::new(e, DetectionConfig::builtin()),
        )
    })
}

/// Parse the location out of an error's display string.
///
/// The file and line come back as strings, trimmed of surrounding
/// whitespace but otherwise unconverted.
pub fn extract_text(err: &dyn Error) -> TextLocation {
    locate_in(&err.to_string(), DetectionConfig::builtin())
}

/// [`extract_text`] over an optional error; `None` yields empty strings.
pub fn extract_text_opt(err: Option<&dyn Error>) -> TextLocation {
    err.map(extract_text).unwrap_or_default()
}

/// Parse the location out of a message.
///
/// # Examples
///
/// ```
/// use callsite_error::extract_text_str;
///
/// let found = extract_text_str("example.go:123: something went wrong");
/// assert_eq!(found.file(), "example.go");
/// assert_eq!(found.line(), "123");
///
/// assert!(!extract_text_str("some error").is_found());
/// ```
pub fn extract_text_str(message: &str) -> TextLocation {
    locate_in(message, DetectionConfig::builtin())
}
