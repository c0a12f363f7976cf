use std::{fmt, panic::Location};

/// The source location a log line is attributed to.
///
/// A caller either names a file and line, or is unknown, in
/// which case it prints as `unknown:0`. Only the basename of
/// the file is printed.
///
/// # Resolution
///
/// [`Caller::here`] resolves the location from the call stack: it
/// reports the nearest caller that is *not* annotated with
/// `#[track_caller]`. The level methods on [`Logger`](crate::Logger)
/// and the free functions of this crate are annotated, so they
/// report the code that called them. Wrapping them in an
/// unannotated helper moves every reported location into that
/// helper.
///
/// The macros ([`info!`](crate::info) etc.) use [`Caller::new`]
/// with `file!()` and `line!()` instead, which cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    file: Option<&'static str>,
    line: u32,
}

impl Caller {
    /// A caller at an explicit location.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: Some(file),
            line,
        }
    }

    /// A caller without a resolvable location.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: None,
            line: 0,
        }
    }

    /// Resolves the location of the nearest caller that is not
    /// itself marked `#[track_caller]`.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }

    /// The basename of the source file, if known.
    #[must_use]
    pub fn file(&self) -> Option<&'static str> {
        self.file.map(basename)
    }

    /// The line number, `0` if unknown.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether this caller carries a location.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.file.is_some()
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl Default for Caller {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file() {
            Some(file) => write!(f, "{file}:{}", self.line),
            None => f.write_str("unknown:0"),
        }
    }
}

fn basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
