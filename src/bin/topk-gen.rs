//! `topk-gen`: write a reproducible `<key> <count>` data file.
//!
//! Run with: `topk-gen <count> [output]`. Without `output` the lines go to
//! standard output; an output path ending in `.gz` or `.zst` is compressed.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::process::ExitCode;
use topk::datagen::{DEFAULT_SEED, generate};
use topk::io::compression::{EncodedWrite, auto_detect_writer};
use tracing::info;

const USAGE: &str = "Usage: topk-gen <count> [output]";

fn main() -> Result<ExitCode> {
    topk::telemetry::init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (count, output) = match args.as_slice() {
        [count] => (count, None),
        [count, output] => (count, Some(output)),
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let count: u64 = count
        .parse()
        .with_context(|| format!("invalid line count {count:?}\n{USAGE}"))?;

    let mut out: Box<dyn EncodedWrite> = match output {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("create {path}"))?;
            auto_detect_writer(f, path).with_context(|| format!("setup compression for {path}"))?
        }
        None => Box::new(io::BufWriter::new(io::stdout().lock())),
    };
    generate(&mut out, count, DEFAULT_SEED)?;
    out.finish().context("finish generated data")?;

    info!(count, output = output.map_or("<stdout>", String::as_str), "generated data");
    Ok(ExitCode::SUCCESS)
}
