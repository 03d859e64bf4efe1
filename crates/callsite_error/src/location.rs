//! Call-site capture.
//!
//! Locations are captured with `#[track_caller]` at the public entry points
//! and then handed to a [`LocationSource`], which decides what site is
//! recorded. The default source reports the tracked caller; the other
//! sources exist so tests can pin line numbers or exercise the sentinel path.

use std::panic::Location;

/// Source location of the code that annotated an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}:{}", file, line)]
pub struct CallSite {
    /// Base name of the source file
    pub file: &'static str,
    /// Line number, `0` when unknown
    pub line: u32,
}

impl CallSite {
    /// Placeholder used when the call site cannot be determined.
    pub const UNKNOWN: CallSite = CallSite {
        file: "???",
        line: 0,
    };

    /// Create a call site, reducing `file` to its base name.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: base_name(file),
            line,
        }
    }

    /// The call site of whoever called this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use callsite_error::CallSite;
    ///
    /// let site = CallSite::caller();
    /// assert!(site.file.ends_with(".rs"));
    /// assert!(site.line > 0);
    /// ```
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Whether this is the [`CallSite::UNKNOWN`] placeholder.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Strip directory components from a source path.
///
/// Both `/` and `\` are treated as separators, since `file!()` paths use the
/// separator of the host that compiled the crate.
///
/// # Examples
///
/// ```
/// use callsite_error::base_name;
///
/// assert_eq!(base_name("crates/app/src/main.rs"), "main.rs");
/// assert_eq!(base_name(r"src\lib.rs"), "lib.rs");
/// assert_eq!(base_name("lib.rs"), "lib.rs");
/// ```
pub fn base_name(path: &'static str) -> &'static str {
    match path.rfind(['/', '\\']) {
        Some(index) if index + 1 < path.len() => &path[index + 1..],
        _ => path,
    }
}

/// Decides which call site gets recorded for an annotation.
///
/// `tracked` is the location the compiler attributed to the caller of the
/// public entry point. Returning `None` records [`CallSite::UNKNOWN`].
pub trait LocationSource {
    /// Resolve the call site for one annotation.
    fn locate(&self, tracked: &'static Location<'static>) -> Option<CallSite>;
}

impl<S: LocationSource + ?Sized> LocationSource for &S {
    fn locate(&self, tracked: &'static Location<'static>) -> Option<CallSite> {
        (**self).locate(tracked)
    }
}

/// Records the caller reported by `#[track_caller]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackedCaller;

impl LocationSource for TrackedCaller {
    fn locate(&self, tracked: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite::from(tracked))
    }
}

/// Always records the same call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLocation(pub CallSite);

impl LocationSource for FixedLocation {
    fn locate(&self, _tracked: &'static Location<'static>) -> Option<CallSite> {
        Some(self.0)
    }
}

/// Never resolves a call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unavailable;

impl LocationSource for Unavailable {
    fn locate(&self, _tracked: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}

/// Resolve a site through `source`, substituting the placeholder on failure.
pub(crate) fn resolve<S: LocationSource + ?Sized>(
    source: &S,
    tracked: &'static Location<'static>,
) -> CallSite {
    source.locate(tracked).unwrap_or(CallSite::UNKNOWN)
}
