use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The leading `#` is optional. The function transparently handles
/// single-digit coordinates, i.e., `abc` is the same as `aabbcc`. Letters may
/// be upper or lower case.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    } else if s.len() != 3 && s.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength);
    }

    // All characters are ASCII, so byte offsets are character offsets.
    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedLength)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color in uppercase hashed hexadecimal format.
pub(crate) fn format_hex(
    rgb: &[u8; 3],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let [r, g, b] = *rgb;
    f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
}

// --------------------------------------------------------------------------------------------------------------------

/// Runs of ASCII digits, i.e., unsigned integers.
static INTEGER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("integer token pattern is valid"));

/// Unsigned decimal numbers with optional fraction, including a bare
/// fraction such as `.5`.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+").expect("number token pattern is valid")
});

/// Check the number of tokens found against the number expected.
#[inline]
fn check_count(actual: usize, expected: usize) -> Result<(), ColorFormatError> {
    match actual.cmp(&expected) {
        core::cmp::Ordering::Less => Err(ColorFormatError::MissingCoordinate),
        core::cmp::Ordering::Equal => Ok(()),
        core::cmp::Ordering::Greater => Err(ColorFormatError::TooManyCoordinates),
    }
}

/// Scan the text for exactly `N` integer tokens.
///
/// Everything between tokens, including signs, decimal points, and units, is
/// ignored. A token too large for `u32` is an oversized coordinate.
pub(crate) fn scan_integers<const N: usize>(s: &str) -> Result<[u32; N], ColorFormatError> {
    let tokens: Vec<&str> = INTEGER_TOKEN.find_iter(s).map(|m| m.as_str()).collect();
    check_count(tokens.len(), N)?;

    let mut values = [0_u32; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse()
            .map_err(|_| ColorFormatError::OversizedCoordinate)?;
    }
    Ok(values)
}

/// Scan the text for exactly `N` numeric tokens, each an integer or decimal
/// number.
///
/// Everything between tokens, including signs, units such as `%` or `°`, and
/// separators, is ignored.
pub(crate) fn scan_numbers<const N: usize>(s: &str) -> Result<[Float; N], ColorFormatError> {
    let tokens: Vec<&str> = NUMBER_TOKEN.find_iter(s).map(|m| m.as_str()).collect();
    check_count(tokens.len(), N)?;

    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token
            .parse()
            .map_err(|_| ColorFormatError::MalformedFloat)?;
    }
    Ok(values)
}

// ====================================================================================================================
