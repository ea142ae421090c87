//! Run configuration.

use crate::error::{Result, TopKError};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

/// Number of keys the command-line tool reports.
pub const DEFAULT_TOP_N: usize = 10;

/// What to read and how many keys to keep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Path to the `<key> <count>` data file.
    pub input: PathBuf,
    /// How many keys to report.
    pub top_n: usize,
}

impl Config {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), top_n: DEFAULT_TOP_N }
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Read the data-file path from the first line of `reader`.
    ///
    /// The trailing `\n` or `\r\n` is stripped; nothing else is trimmed, so
    /// paths with surrounding spaces are taken literally.
    ///
    /// # Errors
    /// Returns [`TopKError::Configuration`] if `reader` is empty, cannot be read,
    /// or its first line is blank.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut line = String::new();
        let n = reader.read_line(&mut line).map_err(|e| {
            TopKError::Configuration(format!("cannot read data-file path: {e}"))
        })?;
        let path = line
            .strip_suffix('\n')
            .map_or(line.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
        if n == 0 || path.is_empty() {
            return Err(TopKError::Configuration(
                "expected a data-file path on the first line of standard input".to_string(),
            ));
        }

        let config = Self::new(path);
        info!(input = %config.input.display(), top_n = config.top_n, "initialized config");
        Ok(config)
    }
}
