//! Numeric argument parsing.

use crate::error::{Error, Result};

/// Name reported for the literal exponent in error messages.
pub const LITERAL_EXPONENT: &str = "literal";

/// Name reported for the match length exponent in error messages.
pub const MATCH_EXPONENT: &str = "match";

/// Splits the leading unsigned integer off `s`.
///
/// The radix follows the C convention: `0x`/`0X` selects hexadecimal, a
/// leading `0` octal, anything else decimal. Returns the value and the
/// unparsed rest, or `None` when there are no digits or the value overflows.
pub(crate) fn split_integer(s: &str) -> Option<(u64, &str)> {
    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        // A bare "0" prefix is still zero in octal
        return (radix == 8).then_some((0, digits));
    }

    let value = u64::from_str_radix(&digits[..end], radix).ok()?;
    Some((value, &digits[end..]))
}

/// Parses a 64-bit seed in decimal, `0x` hexadecimal or leading-zero octal.
///
/// # Errors
///
/// Returns [`Error::InvalidSeed`] for anything but a complete in-range integer.
pub fn parse_seed(s: &str) -> Result<u64> {
    match split_integer(s) {
        Some((seed, "")) => Ok(seed),
        _ => Err(Error::InvalidSeed {
            value: s.to_string(),
        }),
    }
}

/// Parses a compression ratio target.
///
/// # Errors
///
/// Returns [`Error::InvalidRatio`] if `s` is not a float, is below 1.0 or
/// overflows to infinity.
pub fn parse_ratio(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(ratio) if ratio >= 1.0 && ratio.is_finite() => Ok(ratio),
        _ => Err(Error::InvalidRatio {
            value: s.to_string(),
        }),
    }
}

/// Parses a distribution exponent; `which` names it in the error.
///
/// # Errors
///
/// Returns [`Error::InvalidExponent`] if `s` is not a float.
pub fn parse_exponent(s: &str, which: &'static str) -> Result<f64> {
    s.parse::<f64>().map_err(|_| Error::InvalidExponent {
        which,
        value: s.to_string(),
    })
}
