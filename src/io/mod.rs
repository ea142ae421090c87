//! File access for the data source.

pub mod compression;

use crate::error::{Result, TopKError};
use std::fs::File;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Open the data file as a buffered line source, decompressing if needed.
///
/// # Errors
/// Returns [`TopKError::Io`] if the file cannot be opened or its codec fails to
/// initialise.
pub fn open_input(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let io_err = |source| TopKError::Io { path: path.to_path_buf(), source };
    let f = File::open(path).map_err(io_err)?;
    debug!(path = %path.display(), "opened data file");
    compression::auto_detect_reader(f, path).map_err(io_err)
}
