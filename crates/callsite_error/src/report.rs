//! Structured logging of annotated errors.

use crate::caller::extract;
use std::error::Error;

/// Log `err` as an error event with its recovered location as fields.
///
/// The event carries `file`, `line` and `error` fields. For unannotated
/// errors `file` is empty and `line` is `0`; `error` is the full display
/// string either way.
///
/// # Examples
///
/// ```
/// use callsite_error::{inject, report};
///
/// let err = inject("upstream timed out");
/// report(&err);
/// ```
pub fn report(err: &(dyn Error + 'static)) {
    let found = extract(err);
    let inner = found.inner.map(|e| e.to_string()).unwrap_or_default();
    tracing::error!(
        file = found.file,
        line = found.line,
        error = %err,
        inner = %inner,
        "operation failed"
    );
}

/// [`report`] over an optional error; `None` logs nothing.
pub fn report_opt(err: Option<&(dyn Error + 'static)>) {
    if let Some(err) = err {
        report(err);
    }
}
