//! # topk
//!
//! Bounded **top-K selection** over streams of `<key> <count>` lines.
//!
//! The crate reads a data source one line at a time, keeps the `k` records with
//! the largest counts in a size-bounded min-heap, and reports their keys in
//! descending order of count once the input is exhausted. Memory use is
//! O(k) no matter how large the input is.
//!
//! ## Quick Start
//!
//! ```
//! use topk::{TopK, parse_line, Record};
//!
//! # fn main() -> Result<(), topk::ParseError> {
//! let mut top = TopK::new(2);
//! for line in ["a 5", "b 3", "c 9", "d 1"] {
//!     top.observe(parse_line(line)?);
//! }
//! let keys: Vec<Vec<u8>> = top.drain().into_iter().map(Record::into_key).collect();
//! assert_eq!(keys, [b"c".to_vec(), b"a".to_vec()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running against a file
//!
//! ```no_run
//! use topk::{Config, Runner};
//!
//! # fn main() -> anyhow::Result<()> {
//! let summary = Runner::new(Config::new("data.txt").with_top_n(3)).run(std::io::stdout())?;
//! eprintln!("{} lines, {} keys", summary.lines, summary.reported);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure policy
//!
//! Runs are fail-fast: a missing path, an unreadable file or a single malformed
//! line aborts with a [`TopKError`] and nothing is written to the output.
//!
//! ## Module Overview
//!
//! - [`selector`] - The bounded [`TopK`] selector
//! - [`parser`] - `<key> <count>` line parsing
//! - [`runner`] - Streams a data file through parser and selector
//! - [`config`] - Data-file path and `top_n`
//! - [`io`] - File opening with transparent decompression
//! - [`datagen`] - Reproducible synthetic inputs
//! - [`telemetry`] - `tracing` setup for the binaries

pub mod config;
pub mod datagen;
pub mod error;
pub mod io;
pub mod parser;
pub mod record;
pub mod runner;
pub mod selector;
pub mod telemetry;

pub use config::{Config, DEFAULT_TOP_N};
pub use error::{ParseError, TopKError};
pub use parser::parse_line;
pub use record::Record;
pub use runner::{Runner, Selection, Summary, run, select_lines};
pub use selector::TopK;
