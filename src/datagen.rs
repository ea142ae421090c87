//! Reproducible synthetic data files.
//!
//! Lines look like `http://api.tech.com/item/<i> <count>` with `count` drawn
//! uniformly from `1..=n`, where `n` is the number of lines. A fixed seed
//! yields byte-identical files across runs.

use anyhow::{Context, Result};
use std::io::Write;

/// Seed used by the `topk-gen` binary.
pub const DEFAULT_SEED: u64 = 42;

/// Key prefix; the line index is appended.
pub const KEY_PREFIX: &str = "http://api.tech.com/item/";

/// SplitMix64: small, fast, and deterministic for a given seed.
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Value in `lo..=hi`. Panics if `lo > hi`.
    #[inline]
    pub fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        match (hi - lo).checked_add(1) {
            Some(span) => lo + self.next_u64() % span,
            None => self.next_u64(), // full u64 range
        }
    }
}

/// Write `count` data lines to `out` using `seed`.
///
/// `out` is borrowed so the caller can flush or
/// [`finish`](crate::io::compression::EncodedWrite::finish) it and see errors.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn generate<W: Write + ?Sized>(out: &mut W, count: u64, seed: u64) -> Result<()> {
    let mut rng = SplitMix64::new(seed);
    for i in 0..count {
        let c = rng.next_in(1, count);
        writeln!(out, "{KEY_PREFIX}{i} {c}").with_context(|| format!("write line {}", i + 1))?;
    }
    Ok(())
}
