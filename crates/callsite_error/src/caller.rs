//! Structured annotation: an error wrapped together with its call site.

use crate::location::{self, CallSite, TrackedCaller};
use std::error::Error;

/// Owned, thread-safe error of any type.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error annotated with the file and line where it was injected.
///
/// Displays as `file:line: inner` and exposes the wrapped error through
/// [`Error::source`], so identity checks can look through it.
///
/// # Examples
///
/// ```
/// use callsite_error::inject;
///
/// let err = inject("kanna");
/// assert!(err.to_string().ends_with(": kanna"));
/// assert_eq!(err.inner().to_string(), "kanna");
/// ```
#[derive(Debug, derive_more::Display)]
#[display("{}:{}: {}", file, line, inner)]
pub struct CallerError {
    file: &'static str,
    line: u32,
    inner: BoxError,
}

impl CallerError {
    /// Wrap `inner` at an already resolved call site.
    pub fn at(site: CallSite, inner: impl Into<BoxError>) -> Self {
        Self {
            file: site.file,
            line: site.line,
            inner: inner.into(),
        }
    }

    /// Base name of the file that injected the error.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line that injected the error, `0` if unknown.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File and line together.
    pub fn call_site(&self) -> CallSite {
        CallSite {
            file: self.file,
            line: self.line,
        }
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Discard the location and return the wrapped error.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }

    /// Split into file, line and wrapped error.
    pub fn into_parts(self) -> (&'static str, u32, BoxError) {
        (self.file, self.line, self.inner)
    }

    /// Whether the wrapped chain contains an error of type `T`.
    pub fn is<T: Error + 'static>(&self) -> bool {
        find_in_chain::<T>(self).is_some()
    }

    /// The wrapped error as `T`, if it is one.
    pub fn downcast_inner_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl Error for CallerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}

/// Location recovered from an error by [`extract`].
///
/// Unannotated errors give an empty `file`, a zero `line` and the error
/// itself as `inner`. Absent input gives `inner == None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extracted<'a> {
    /// Base name of the injecting file, empty if not found
    pub file: &'static str,
    /// Injecting line, `0` if not found
    pub line: u32,
    /// Wrapped error, or the input itself when no annotation was found
    pub inner: Option<&'a (dyn Error + 'static)>,
}

impl Extracted<'_> {
    /// The recovered call site, if an annotation was found.
    pub fn call_site(&self) -> Option<CallSite> {
        (!self.file.is_empty()).then_some(CallSite {
            file: self.file,
            line: self.line,
        })
    }

    /// Whether an annotation was found.
    pub fn is_annotated(&self) -> bool {
        !self.file.is_empty()
    }
}

/// Annotate an error with the location of the caller.
///
/// # Examples
///
/// ```
/// use callsite_error::{extract, inject};
///
/// let err = inject(std::io::Error::other("disk full"));
/// let found = extract(&err);
/// assert!(found.file.ends_with(".rs"));
/// assert!(found.line > 0);
/// assert_eq!(found.inner.unwrap().to_string(), "disk full");
/// ```
#[track_caller]
pub fn inject<E: Into<BoxError>>(err: E) -> CallerError {
    let site = location::resolve(&TrackedCaller, std::panic::Location::caller());
    CallerError::at(site, err)
}

/// Annotate an optional error; `None` stays `None`.
#[track_caller]
pub fn inject_opt<E: Into<BoxError>>(err: Option<E>) -> Option<CallerError> {
    let tracked = std::panic::Location::caller();
    err.map(|e| CallerError::at(location::resolve(&TrackedCaller, tracked), e))
}

/// Recover the location stored by [`inject`].
///
/// The first [`CallerError`] in the source chain wins. Errors that were
/// never annotated come back unchanged with an empty location.
pub fn extract<'a>(err: &'a (dyn Error + 'static)) -> Extracted<'a> {
    match find_in_chain::<CallerError>(err) {
        Some(annotated) => Extracted {
            file: annotated.file,
            line: annotated.line,
            inner: Some(&*annotated.inner),
        },
        None => Extracted {
            inner: Some(err),
            ..Extracted::default()
        },
    }
}

/// [`extract`] over an optional error; `None` yields an empty result.
pub fn extract_opt<'a>(err: Option<&'a (dyn Error + 'static)>) -> Extracted<'a> {
    err.map(extract).unwrap_or_default()
}

/// Iterate over `err` and every error reachable through [`Error::source`].
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// First error of type `T` in the source chain of `err`.
///
/// # Examples
///
/// ```
/// use callsite_error::{find_in_chain, inject};
///
/// #[derive(Debug, derive_more::Display, derive_more::Error)]
/// #[display("not found")]
/// struct NotFound;
///
/// let err = inject(inject(NotFound));
/// assert!(find_in_chain::<NotFound>(&err).is_some());
/// ```
pub fn find_in_chain<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

/// Annotate the error side of a `Result`.
pub trait ResultExt<T> {
    /// Wrap an `Err` in a [`CallerError`] located at the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use callsite_error::{CallerError, ResultExt};
    ///
    /// fn parse(raw: &str) -> Result<u16, CallerError> {
    ///     raw.parse::<u16>().inject()
    /// }
    ///
    /// assert_eq!(parse("8080").unwrap(), 8080);
    /// assert!(parse("port").unwrap_err().to_string().contains("invalid digit"));
    /// ```
    fn inject(self) -> Result<T, CallerError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn inject(self) -> Result<T, CallerError> {
        let tracked = std::panic::Location::caller();
        self.map_err(|e| CallerError::at(location::resolve(&TrackedCaller, tracked), e))
    }
}
