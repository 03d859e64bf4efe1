//! Annotation with an injected location source and detection config.

use crate::caller::{BoxError, CallerError};
use crate::config::DetectionConfig;
use crate::location::{self, LocationSource, TrackedCaller};
use crate::textual::{self, Restated, TextLocation};
use std::error::Error;

/// Injects and extracts locations using a chosen [`LocationSource`].
///
/// The free functions of this crate behave like
/// `Annotator::default()`. Swap the source to pin line numbers in tests.
///
/// # Examples
///
/// ```
/// use callsite_error::{Annotator, CallSite, FixedLocation};
///
/// let annotator = Annotator::new(FixedLocation(CallSite::new("src/db.rs", 7)));
/// let err = annotator.inject("connection reset");
/// assert_eq!(err.to_string(), "db.rs:7: connection reset");
/// ```
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct Annotator<S = TrackedCaller> {
    source: S,
    config: DetectionConfig,
}

impl<S: LocationSource> Annotator<S> {
    /// Create an annotator with the default detection config.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DetectionConfig::default())
    }

    /// Create an annotator with a specific detection config.
    pub fn with_config(source: S, config: DetectionConfig) -> Self {
        Self { source, config }
    }

    /// Wrap `err` at the call site chosen by the source.
    #[track_caller]
    pub fn inject<E: Into<BoxError>>(&self, err: E) -> CallerError {
        let site = location::resolve(&self.source, std::panic::Location::caller());
        CallerError::at(site, err)
    }

    /// [`Annotator::inject`] over an optional error.
    #[track_caller]
    pub fn inject_opt<E: Into<BoxError>>(&self, err: Option<E>) -> Option<CallerError> {
        let tracked = std::panic::Location::caller();
        err.map(|e| CallerError::at(location::resolve(&self.source, tracked), e))
    }

    /// Rewrite `err`'s message, replacing any location prefix with this call site.
    #[track_caller]
    pub fn inject_text<E: Into<BoxError>>(&self, err: E) -> CallerError {
        let site = location::resolve(&self.source, std::panic::Location::caller());
        CallerError::at(site, Restated::new(err, &self.config))
    }

    /// [`Annotator::inject_text`] over an optional error.
    #[track_caller]
    pub fn inject_text_opt<E: Into<BoxError>>(&self, err: Option<E>) -> Option<CallerError> {
        let tracked = std::panic::Location::caller();
        err.map(|e| {
            CallerError::at(
                location::resolve(&self.source, tracked),
                Restated::new(e, &self.config),
            )
        })
    }

    /// Parse the location out of an error's display string.
    pub fn extract_text(&self, err: &dyn Error) -> TextLocation {
        textual::locate_in(&err.to_string(), &self.config)
    }

    /// Parse the location out of a message.
    pub fn extract_text_str(&self, message: &str) -> TextLocation {
        textual::locate_in(message, &self.config)
    }

    /// `message` without its location prefix.
    pub fn strip<'a>(&self, message: &'a str) -> &'a str {
        textual::strip_prefix(message, &self.config)
    }
}
