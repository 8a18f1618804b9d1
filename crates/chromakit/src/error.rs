//! Utility module with chromakit's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::model::Format;

/// An out-of-bounds error.
///
/// This error indicates a numeric value that is out of bounds for some range.
/// The only range strictly enforced by this crate is `0..=255` for the
/// channels of [`Rgb`](crate::Rgb), both when constructing a color from wider
/// integers and when parsing RGB text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: i64,
    pub expected: core::ops::RangeInclusive<i64>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<i64>>(value: V, expected: core::ops::RangeInclusive<i64>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
///
/// Each variant describes why some text does not match the grammar of the
/// requested [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormatError {
    /// A hexadecimal color with characters other than hexadecimal digits,
    /// after dropping an optional leading `#`. For example, `xyz` and `#0g0`
    /// both are malformed.
    MalformedHex,

    /// A hexadecimal color with neither 3 nor 6 digits. For example, `#ff` is
    /// missing a digit.
    UnexpectedLength,

    /// A color format with fewer numbers than coordinates. For example,
    /// `12, 34` is missing the third RGB coordinate.
    MissingCoordinate,

    /// A color format with more numbers than coordinates. For example,
    /// `1.5, 2, 3` has four integer tokens and hence one RGB coordinate too
    /// many.
    TooManyCoordinates,

    /// A color format with an integer coordinate that has too many digits to
    /// be represented at all.
    OversizedCoordinate,

    /// A color format with a coordinate that is not a floating point number.
    MalformedFloat,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match self {
            MalformedHex => f.write_str("color format should contain only hexadecimal digits"),
            UnexpectedLength => f.write_str("color format should have 3 or 6 hexadecimal digits"),
            MissingCoordinate => f.write_str("color format is missing a coordinate"),
            TooManyCoordinates => f.write_str("color format has too many coordinates"),
            OversizedCoordinate => {
                f.write_str("color format coordinates should be small integers but one has too many digits")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error while converting or parsing colors.
///
/// This is the one error type returned by chromakit's fallible operations.
/// Every failure is final; no operation produces partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// Text does not match the grammar for the given format.
    InvalidFormat {
        format: Format,
        reason: ColorFormatError,
    },

    /// A numeric coordinate is outside its valid range.
    OutOfRange(OutOfBoundsError),

    /// The format tag is not one of `hex`, `rgb`, `cmyk`, `hsl`, or `hsv`.
    UnsupportedFormat(String),
}

impl ConversionError {
    /// Create a new invalid format error.
    pub fn invalid(format: Format, reason: ColorFormatError) -> Self {
        Self::InvalidFormat { format, reason }
    }
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFormat { format, reason } => {
                f.write_fmt(format_args!("invalid {} color: {}", format.name(), reason))
            }
            Self::OutOfRange(error) => f.write_fmt(format_args!("color coordinate {}", error)),
            Self::UnsupportedFormat(tag) => f.write_fmt(format_args!(
                "unsupported color format {:?}, expected hex, rgb, cmyk, hsl, or hsv",
                tag
            )),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat { reason, .. } => Some(reason),
            Self::OutOfRange(error) => Some(error),
            Self::UnsupportedFormat(_) => None,
        }
    }
}

impl From<OutOfBoundsError> for ConversionError {
    fn from(value: OutOfBoundsError) -> Self {
        Self::OutOfRange(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<ConversionError> for PyErr {
    fn from(value: ConversionError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
