//! `topk`: print the ten keys with the largest counts.
//!
//! Reads a data-file path from the first line of standard input, then writes
//! one key per line to standard output, highest count first.
//!
//! Run with: `echo data.txt | topk`

use anyhow::Result;
use std::io;

fn main() -> Result<()> {
    topk::telemetry::init()?;

    topk::run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
