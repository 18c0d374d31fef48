//! Error types.

/// Detailed cause of a [`UriError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UriErrorKind {
    /// Port that is neither the well-known port of the scheme
    /// nor an integer in the range `0..=65535`, or that is not numeric.
    ///
    /// The error index points to the start of the port.
    InvalidPort,
    /// Character not allowed in a path.
    ///
    /// The error index points to the character.
    InvalidPath,
    /// Query that does not form `key[=value]` pairs joined by `&`.
    ///
    /// The error index points to the first byte that breaks the grammar,
    /// or to the end of the query if it ends prematurely.
    InvalidQuery,
}

/// An error occurred when parsing a URI or when setting one of its components.
///
/// The index is relative to the value passed to the failing method: the whole
/// input for [`Uri::parse`], or the component for a `with_*` method.
///
/// [`Uri::parse`]: crate::Uri::parse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UriError {
    pub(crate) index: usize,
    pub(crate) kind: UriErrorKind,
}

impl UriError {
    pub(crate) fn new(index: usize, kind: UriErrorKind) -> UriError {
        UriError { index, kind }
    }

    /// Returns the same error with its index moved by `offset`.
    pub(crate) fn shift(self, offset: usize) -> UriError {
        UriError {
            index: self.index + offset,
            kind: self.kind,
        }
    }

    /// Returns the index where the error occurred.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    pub fn kind(&self) -> UriErrorKind {
        self.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}

pub(crate) type Result<T, E = UriError> = core::result::Result<T, E>;
