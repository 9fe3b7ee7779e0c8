use std::convert::Infallible;

/// Failures raised by the library itself, independent of any callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Malformed pair at index {index}: {entry:?} has no {separator:?} separator")]
    MalformedPair {
        index: usize,
        entry: String,
        separator: char,
    },
}

impl Error {
    pub fn index(&self) -> usize {
        match self {
            Error::MalformedPair { index, .. } => *index,
        }
    }
}

/// Result of a traversal: either the library failed, or the callback did.
///
/// The callback error is carried untouched in [`VisitError::Callback`], so
/// callers can get their own error type back with [`VisitError::into_callback`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitError<E> {
    #[error(transparent)]
    Source(#[from] Error),
    #[error("{0}")]
    Callback(E),
}

impl<E> VisitError<E> {
    pub fn is_callback(&self) -> bool {
        matches!(self, VisitError::Callback(_))
    }

    /// The callback error, if that is what stopped the traversal.
    pub fn into_callback(self) -> Option<E> {
        match self {
            VisitError::Callback(e) => Some(e),
            VisitError::Source(_) => None,
        }
    }

    pub fn map_callback<T>(self, f: impl FnOnce(E) -> T) -> VisitError<T> {
        match self {
            VisitError::Source(e) => VisitError::Source(e),
            VisitError::Callback(e) => VisitError::Callback(f(e)),
        }
    }
}

impl VisitError<Infallible> {
    /// A callback that cannot fail leaves only the library error.
    pub fn into_source(self) -> Error {
        match self {
            VisitError::Source(e) => e,
            VisitError::Callback(never) => match never {},
        }
    }
}
