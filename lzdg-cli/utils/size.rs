//! Size arguments with binary suffixes.

use crate::error::{Error, Result};

use super::number::split_integer;

const KIB: u64 = 1024;

/// Parses a byte count with an optional `k`/`m`/`g`/`t` suffix.
///
/// Suffixes are case-insensitive powers of 1024. The number itself follows
/// the same radix rules as seeds (`0x` hexadecimal, leading-zero octal).
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] when:
///
/// - The string has no leading digits or trailing garbage after the suffix
/// - The suffix is unknown
/// - The result is zero or overflows [`u64`]
pub fn parse_size(s: &str) -> Result<u64> {
    let invalid = || Error::InvalidSize {
        value: s.to_string(),
    };

    let (value, rest) = split_integer(s).ok_or_else(invalid)?;

    let multiplier = match rest.to_ascii_lowercase().as_str() {
        "" => 1,
        "k" => KIB,
        "m" => KIB.pow(2),
        "g" => KIB.pow(3),
        "t" => KIB.pow(4),
        _ => return Err(invalid()),
    };

    match value.checked_mul(multiplier) {
        Some(size) if size > 0 => Ok(size),
        _ => Err(invalid()),
    }
}
