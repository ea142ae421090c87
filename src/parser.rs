//! Parsing of `<key> <count>` lines.

use crate::error::ParseError;
use crate::record::Record;

/// Separator between the key and its count.
pub const SEPARATOR: u8 = b' ';

/// Parse one input line into a [`Record`].
///
/// The line is split at the **first** space: every byte before it is the key
/// (possibly empty, not necessarily UTF-8), everything after it must be a
/// base-10 `u64`.
///
/// # Errors
/// - [`ParseError::MissingSeparator`] if the line contains no space.
/// - [`ParseError::InvalidCount`] if the suffix is empty, signed, contains
///   anything but ASCII digits, or overflows `u64`.
///
/// # Example
/// ```
/// use topk::parse_line;
///
/// let r = parse_line("http://api.tech.com/item/7 42").unwrap();
/// assert_eq!(r.key(), b"http://api.tech.com/item/7");
/// assert_eq!(r.count(), 42);
/// ```
pub fn parse_line(line: impl AsRef<[u8]>) -> Result<Record, ParseError> {
    let line = line.as_ref();
    let sep = line
        .iter()
        .position(|&b| b == SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;
    let count = parse_count(&line[sep + 1..])?;
    Ok(Record::new(&line[..sep], count))
}

fn parse_count(raw: &[u8]) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidCount(String::from_utf8_lossy(raw).into_owned());
    // `u64::from_str` tolerates a leading '+'; counts are bare digits only.
    if raw.is_empty() || !raw.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    raw.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
    .ok_or_else(invalid)
}
