//! Call-site annotation for errors.
//!
//! This crate attaches the file and line where an operation failed to the
//! error it produced, and recovers that location later for diagnostics or
//! logging.
//!
//! # Annotation Styles
//!
//! - **Structured**: [`inject`] wraps an error in a [`CallerError`] carrying
//!   `(file, line, inner)`; [`extract`] walks the source chain to get it back.
//! - **Textual**: [`inject_text`] rewrites the message as `file:line: message`,
//!   replacing any prefix already there; [`extract_text`] parses it back out
//!   of the display string.
//!
//! Both styles produce a [`CallerError`], so the displayed text is the same
//! and identity checks keep working through [`std::error::Error::source`].
//!
//! # Examples
//!
//! ```
//! use callsite_error::{extract, inject};
//!
//! let err = inject("kanna");
//! println!("{}", err);
//!
//! let found = extract(&err);
//! assert!(found.file.ends_with(".rs"));
//! assert!(found.line > 0);
//! assert_eq!(found.inner.unwrap().to_string(), "kanna");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod annotator;
mod caller;
mod config;
mod error;
mod location;
mod report;
mod textual;

pub use annotator::Annotator;
pub use caller::{
    BoxError, CallerError, Extracted, ResultExt, chain, extract, extract_opt, find_in_chain,
    inject, inject_opt,
};
pub use config::{DEFAULT_SOURCE_SUFFIXES, DetectionConfig, DetectionConfigBuilder};
pub use error::{CallsiteError, CallsiteErrorKind, CallsiteResult};
pub use location::{CallSite, FixedLocation, LocationSource, TrackedCaller, Unavailable, base_name};
pub use report::{report, report_opt};
pub use textual::{
    LocationPrefix, Restated, TextLocation, extract_text, extract_text_opt, extract_text_str,
    inject_text, inject_text_opt, split_prefix, strip_prefix,
};
