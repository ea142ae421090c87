//! Execution of a single top-K run.
//!
//! The runner owns no global state: the path source and the output sink are
//! passed in, so the whole pipeline can be driven from in-memory buffers.

use crate::config::Config;
use crate::error::{Result, TopKError};
use crate::io::open_input;
use crate::parser::parse_line;
use crate::record::Record;
use crate::selector::TopK;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Outcome of streaming one data source through a selector.
#[derive(Debug)]
pub struct Selection {
    /// Candidates retained after the last line.
    pub top: TopK,
    /// Number of data lines consumed.
    pub lines: usize,
}

/// Counters reported after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub reported: usize,
}

/// Stream every line of `reader` through [`parse_line`] into a [`TopK`] of size `k`.
///
/// Lines are read as raw bytes into one reused buffer, so keys need not be
/// UTF-8. `\n` and `\r\n` terminators are stripped. `source` only labels errors.
///
/// # Errors
/// - [`TopKError::Io`] if reading fails.
/// - [`TopKError::MalformedLine`] on the first line that does not parse.
pub fn select_lines<R: BufRead>(mut reader: R, k: usize, source: &Path) -> Result<Selection> {
    let mut top = TopK::new(k);
    let mut buf = Vec::new();
    let mut lines = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source_err| TopKError::Io { path: source.to_path_buf(), source: source_err })?;
        if n == 0 {
            break;
        }
        lines += 1;

        let line = buf
            .strip_suffix(b"\n")
            .map_or(buf.as_slice(), |l| l.strip_suffix(b"\r").unwrap_or(l));
        let record = parse_line(line).map_err(|parse_err| {
            warn!(path = %source.display(), line = lines, reason = %parse_err, "malformed input line");
            TopKError::MalformedLine { line: lines, source: parse_err }
        })?;
        top.observe(record);
    }

    Ok(Selection { top, lines })
}

/// One key per line, highest count first, keys written byte for byte.
fn render(ranked: Vec<Record>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(ranked.iter().map(|r| r.key().len() + 1).sum());
    for key in ranked.into_iter().map(Record::into_key) {
        buf.extend_from_slice(&key);
        buf.push(b'\n');
    }
    buf
}

/// Runs a [`Config`] against its data file.
#[derive(Clone, Debug)]
pub struct Runner {
    pub config: Config,
}

impl Runner {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the configured file and select its top records.
    ///
    /// # Errors
    /// See [`open_input`] and [`select_lines`].
    pub fn select(&self) -> Result<Selection> {
        let reader = open_input(&self.config.input)?;
        select_lines(reader, self.config.top_n, &self.config.input)
    }

    /// Select, then write one key per line to `out`, highest count first.
    ///
    /// Nothing is written unless the whole input was consumed successfully,
    /// and the result goes out in a single `write_all`.
    ///
    /// # Errors
    /// Any error from [`select`](Self::select), or [`TopKError::Output`] if
    /// writing to `out` fails.
    pub fn run<W: Write>(&self, mut out: W) -> Result<Summary> {
        let Selection { top, lines } = self.select()?;
        let ranked = top.drain();
        let reported = ranked.len();

        out.write_all(&render(ranked)).map_err(TopKError::Output)?;
        out.flush().map_err(TopKError::Output)?;

        info!(input = %self.config.input.display(), lines, reported, "top-k run complete");
        Ok(Summary { lines, reported })
    }
}

/// Read the data-file path from `stdin`, run with the default
/// [`top_n`](Config::top_n), and write the ranked keys to `stdout`.
///
/// # Errors
/// [`TopKError::Configuration`] if no path is supplied, otherwise anything
/// [`Runner::run`] returns.
pub fn run<R: BufRead, W: Write>(stdin: R, stdout: W) -> Result<Summary> {
    let config = Config::from_reader(stdin)?;
    Runner::new(config).run(stdout)
}
