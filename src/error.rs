//! Error taxonomy for a top-K run.
//!
//! Every variant is fatal: the run stops at the first error and nothing is
//! written to the output.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single input line could not be turned into a [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no `' '` between key and count.
    #[error("missing separator")]
    MissingSeparator,
    /// The text after the separator is not a base-10 `u64`.
    #[error("invalid count {0:?}")]
    InvalidCount(String),
}

/// Errors that abort a top-K run.
#[derive(Debug, Error)]
pub enum TopKError {
    /// No usable data-file path was supplied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The data file could not be opened or read.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line did not match `<key> <count>`. `line` is 1-based; the
    /// reason is the error's source.
    #[error("malformed line {line}")]
    MalformedLine {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The ranked keys could not be written out.
    #[error("cannot write results")]
    Output(#[source] std::io::Error),
}

pub type Result<T, E = TopKError> = std::result::Result<T, E>;
