//! Error types surfaced by table construction and strict lookup

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A source exists but its tabular content is malformed.
    #[error("failed to parse {} (line {}): {}", path.display(), line, reason)]
    Parse { path: PathBuf, line: usize, reason: ParseErrorKind },

    /// A source exists but could not be read.
    #[error("failed to read {}: {}", path.display(), source)]
    Io { path: PathBuf, source: std::io::Error },

    /// Strict `fetch` on a key the table does not define.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

/// What made a source unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnclosedQuote,
    StrayQuote,
    TrailingAfterQuote,
    MissingKeyColumn,
    MissingKey,
    InvalidUtf8,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnclosedQuote => "unclosed quoted field",
            Self::StrayQuote => "illegal quote in unquoted field",
            Self::TrailingAfterQuote => "unexpected characters after closing quote",
            Self::MissingKeyColumn => "header row has no `key` column",
            Self::MissingKey => "row has an empty `key` cell",
            Self::InvalidUtf8 => "content is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, reason: ParseErrorKind) -> Self {
        Self::Parse { path: path.into(), line, reason }
    }

    /// Returns `true` for malformed-source errors.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` for strict-lookup misses.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
