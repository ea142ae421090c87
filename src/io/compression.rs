//! Transparent compression for data files.
//!
//! Readers are wrapped with a decompressor only when the stream's leading
//! magic bytes match a known codec, so a plain-text file is read as text
//! whatever its name. Writers pick a codec by path extension and must be
//! closed with [`EncodedWrite::finish`]. With no codec features enabled both
//! directions are plain buffered pass-throughs.
//!
//! Built-in codecs:
//! - **Gzip** (`.gz`) via `flate2` (feature: `compression-gzip`)
//! - **Zstd** (`.zst`) via `zstd` (feature: `compression-zstd`)

use std::io::{BufRead, BufReader, BufWriter, Read, Result, Write};
use std::path::Path;
use tracing::debug;

/// A compression format that can wrap readers and writers.
pub trait CompressionCodec: Send + Sync {
    /// Human-readable codec name (e.g., "gzip").
    fn name(&self) -> &'static str;

    /// Lowercase file extensions, leading dot included.
    fn extensions(&self) -> &'static [&'static str];

    /// Leading bytes that identify the format, if it has any.
    fn magic_bytes(&self) -> Option<&'static [u8]>;

    fn wrap_reader(&self, reader: Box<dyn Read>) -> Result<Box<dyn Read>>;

    fn wrap_writer(&self, writer: Box<dyn EncodedWrite>) -> Result<Box<dyn EncodedWrite>>;
}

/// A writer whose stream must be terminated explicitly.
///
/// Encoders write their trailer in `finish`; dropping one instead loses any
/// error from that final write.
pub trait EncodedWrite: Write {
    /// Write any trailer, then flush everything down to the sink.
    fn finish(self: Box<Self>) -> Result<()>;
}

impl<W: Write> EncodedWrite for BufWriter<W> {
    fn finish(mut self: Box<Self>) -> Result<()> {
        self.flush()
    }
}

static CODECS: &[&dyn CompressionCodec] = &[
    #[cfg(feature = "compression-gzip")]
    &GzipCodec,
    #[cfg(feature = "compression-zstd")]
    &ZstdCodec,
];

/// Codecs compiled into this build.
#[must_use]
pub fn codecs() -> &'static [&'static dyn CompressionCodec] {
    CODECS
}

fn detect_from_extension(path: &Path) -> Option<&'static dyn CompressionCodec> {
    let path_str = path.to_string_lossy().to_lowercase();
    codecs()
        .iter()
        .copied()
        .find(|codec| codec.extensions().iter().any(|ext| path_str.ends_with(ext)))
}

/// Match registered signatures against the buffered head of the stream
/// without consuming it.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> Option<&'static dyn CompressionCodec> {
    let buf = reader.fill_buf().ok()?;
    if buf.is_empty() {
        return None;
    }
    codecs()
        .iter()
        .copied()
        .find(|codec| codec.magic_bytes().is_some_and(|magic| buf.starts_with(magic)))
}

/// Wrap `reader` with a decompressor if its content starts with a known
/// signature; otherwise return it as-is behind a buffer.
///
/// The extension of `path_hint` is not consulted, it only labels log events.
///
/// # Errors
/// Returns an error if the selected codec fails to initialise.
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn BufRead>> {
    let path = path_hint.as_ref();
    let mut buf_reader = BufReader::new(reader);
    if let Some(codec) = detect_from_magic(&mut buf_reader) {
        debug!(path = %path.display(), codec = codec.name(), "codec selected by magic bytes");
        return Ok(Box::new(BufReader::new(codec.wrap_reader(Box::new(buf_reader))?)));
    }

    Ok(Box::new(buf_reader))
}

/// Wrap `writer` with a compressor chosen by the extension of `path_hint`.
///
/// Callers must close the returned writer with [`EncodedWrite::finish`].
///
/// # Errors
/// Returns an error if the selected codec fails to initialise.
pub fn auto_detect_writer<W: Write + 'static>(
    writer: W,
    path_hint: impl AsRef<Path>,
) -> Result<Box<dyn EncodedWrite>> {
    let path = path_hint.as_ref();
    let buffered: Box<dyn EncodedWrite> = Box::new(BufWriter::new(writer));
    match detect_from_extension(path) {
        Some(codec) => {
            debug!(path = %path.display(), codec = codec.name(), "compressing output");
            codec.wrap_writer(buffered)
        }
        None => Ok(buffered),
    }
}

#[cfg(feature = "compression-gzip")]
struct GzipCodec;

#[cfg(feature = "compression-gzip")]
impl CompressionCodec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".gz", ".gzip"]
    }

    fn magic_bytes(&self) -> Option<&'static [u8]> {
        Some(&[0x1f, 0x8b])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> Result<Box<dyn Read>> {
        // Multi-member so concatenated .gz files read through to the end.
        Ok(Box::new(flate2::read::MultiGzDecoder::new(reader)))
    }

    fn wrap_writer(&self, writer: Box<dyn EncodedWrite>) -> Result<Box<dyn EncodedWrite>> {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }
}

#[cfg(feature = "compression-gzip")]
impl EncodedWrite for flate2::write::GzEncoder<Box<dyn EncodedWrite>> {
    fn finish(self: Box<Self>) -> Result<()> {
        let inner = flate2::write::GzEncoder::finish(*self)?;
        inner.finish()
    }
}

#[cfg(feature = "compression-zstd")]
struct ZstdCodec;

#[cfg(feature = "compression-zstd")]
impl CompressionCodec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".zst", ".zstd"]
    }

    fn magic_bytes(&self) -> Option<&'static [u8]> {
        Some(&[0x28, 0xb5, 0x2f, 0xfd])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> Result<Box<dyn Read>> {
        zstd::stream::read::Decoder::new(reader).map(|d| Box::new(d) as Box<dyn Read>)
    }

    fn wrap_writer(&self, writer: Box<dyn EncodedWrite>) -> Result<Box<dyn EncodedWrite>> {
        zstd::stream::write::Encoder::new(writer, 3)
            .map(|e| Box::new(e) as Box<dyn EncodedWrite>)
    }
}

#[cfg(feature = "compression-zstd")]
impl EncodedWrite for zstd::stream::write::Encoder<'static, Box<dyn EncodedWrite>> {
    fn finish(self: Box<Self>) -> Result<()> {
        let inner = zstd::stream::write::Encoder::finish(*self)?;
        inner.finish()
    }
}
