//! Crate-wide error taxonomy.

use core::fmt;

/// Represents an error raised by the facade or surfaced from the engine.
///
/// Absence of a match is never an error; searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual flag spec that names no known option.
    InvalidFlag(String),

    /// The pattern was rejected by the engine at compile time. Carries the
    /// pattern verbatim and the engine's diagnostic.
    InvalidPattern { pattern: String, reason: String },

    /// A group index outside the match region.
    IndexOutOfRange { index: usize, len: usize },

    /// The engine failed mid-search with something other than a mismatch.
    /// The engine's rendered error string is passed through verbatim.
    Engine(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidFlag(flag) => write!(f, "unknown regexp flag: {}", flag),
            Error::InvalidPattern { pattern, reason } => write!(
                f,
                "'{}' is an invalid regular expression because {}",
                pattern, reason
            ),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of matches (length {})", index, len)
            }
            Error::Engine(text) => write!(f, "regexp engine error: {}", text),
        }
    }
}

impl std::error::Error for Error {}
