use std::fmt;

/// A enum that contains the different types of errors that the library returns
/// as part of Result's.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string of non-zero length was requested, but no character classes
    /// were selected to draw it from.
    EmptySelection,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "no character classes selected"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
