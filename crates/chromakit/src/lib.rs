//! # Chromakit
//!
//! Chromakit converts 24-bit colors between five representations, derives
//! color harmonies, and checks WCAG contrast.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. The `pyffi` feature adds a Python extension module with the same
functionality."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Chromakit's main abstractions are:
//!
//!   * [`Rgb`] is the **canonical color representation** with three byte
//!     channels. Every other representation is derived from it or reduced to
//!     it. Its [`Display`](struct.Rgb.html#impl-Display-for-Rgb) is the HEX
//!     representation `#RRGGBB`.
//!   * [`Cmyk`], [`Hsl`], and [`Hsv`] are the **derived representations**,
//!     holding percentages and degrees rounded to one decimal.
//!     [`convert_all`] computes all of them at once, as [`Conversions`].
//!   * [`Format`] names the five representations and **parses free-form
//!     text**, such as `rgb(12 34 56)` or `120°, 50%, 60%`, into colors.
//!   * The [`harmony`] module derives **color harmonies** by rotating hues.
//!   * The [`wcag`] module computes **relative luminance and contrast
//!     ratios** and classifies them against the WCAG thresholds.
//!
//! All operations are pure and synchronous. Failures are reported as
//! [`ConversionError`](error::ConversionError) and never logged.
//!
//!
//! ## 2. Converting Colors
//!
//! ```
//! # use chromakit::{convert_all, parse, Rgb};
//! let color = parse("26, 43, 60", "rgb")?;
//! assert_eq!(color, Rgb::new(26, 43, 60));
//!
//! let all = convert_all(color);
//! assert_eq!(all.hex, "#1A2B3C");
//! assert_eq!(all.cmyk.to_string(), "56.7%, 28.3%, 0.0%, 76.5%");
//! assert_eq!(all.hsl.to_string(), "210.0°, 39.5%, 16.9%");
//! assert_eq!(all.hsv.to_string(), "210.0°, 56.7%, 23.5%");
//! # Ok::<(), chromakit::error::ConversionError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Chromakit supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls chromakit's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod harmony;
mod model;
pub mod wcag;

#[cfg(feature = "pyffi")]
mod pyffi;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use harmony::{analogous, complementary, split_complementary, triadic};
pub use model::{Cmyk, Conversions, Format, Hsl, Hsv, Rgb};
pub use wcag::{classify, contrast_ratio, relative_luminance, WcagRating};

use error::ConversionError;

// ====================================================================================================================

/// Parse a color in hexadecimal format.
///
/// The text may start with one `#` and must have exactly 3 or 6 hexadecimal
/// digits. The 3-digit form expands each digit by duplication.
///
/// ```
/// # use chromakit::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#000")?, Rgb::BLACK);
/// assert_eq!(hex_to_rgb("1a2b3c")?, Rgb::new(26, 43, 60));
/// # Ok::<(), chromakit::error::ConversionError>(())
/// ```
pub fn hex_to_rgb(text: &str) -> Result<Rgb, ConversionError> {
    Format::Hex.parse(text)
}

/// Format the channels in hexadecimal format `#RRGGBB`.
///
/// This function fails if a channel is outside `0..=255`.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String, ConversionError> {
    Ok(Rgb::try_new(r, g, b)?.to_hex())
}

/// Convert the color to CMYK.
pub fn rgb_to_cmyk(color: Rgb) -> Cmyk {
    color.to_cmyk()
}

/// Convert the CMYK percentages to RGB, clamping out-of-range results.
pub fn cmyk_to_rgb(c: Float, m: Float, y: Float, k: Float) -> Rgb {
    Cmyk::new(c, m, y, k).to_rgb()
}

/// Convert the color to HSL.
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    color.to_hsl()
}

/// Convert the hue in degrees and the saturation and lightness percentages to
/// RGB.
pub fn hsl_to_rgb(h: Float, s: Float, l: Float) -> Rgb {
    Hsl::new(h, s, l).to_rgb()
}

/// Convert the color to HSV.
pub fn rgb_to_hsv(color: Rgb) -> Hsv {
    color.to_hsv()
}

/// Convert the hue in degrees and the saturation and value percentages to
/// RGB.
pub fn hsv_to_rgb(h: Float, s: Float, v: Float) -> Rgb {
    Hsv::new(h, s, v).to_rgb()
}

/// Convert the color to all five representations.
pub fn convert_all(color: Rgb) -> Conversions {
    color.convert_all()
}

/// Parse the text as a color in the format with the given tag.
///
/// Tags are `hex`, `rgb`, `cmyk`, `hsl`, and `hsv`, matched ignoring ASCII
/// case. See [`Format::parse`] for the grammar of each format.
pub fn parse(text: &str, format: &str) -> Result<Rgb, ConversionError> {
    format.parse::<Format>()?.parse(text)
}

// ====================================================================================================================

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyo3::pymodule]
pub fn chromakit(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    pyffi::register(m)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{ColorFormatError, ConversionError, OutOfBoundsError};

    #[test]
    fn test_hex_round_trip() -> Result<(), ConversionError> {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(3) {
                for b in 0..=255 {
                    let hex = rgb_to_hex(r, g, b)?;
                    assert_eq!(
                        <(u8, u8, u8)>::from(hex_to_rgb(&hex)?),
                        (r as u8, g as u8, b as u8)
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_scenarios() -> Result<(), ConversionError> {
        assert_eq!(rgb_to_hex(255, 0, 0)?, "#FF0000");
        assert_eq!(
            rgb_to_hex(0, 0, 256),
            Err(ConversionError::OutOfRange(OutOfBoundsError::new(
                256,
                0..=255
            )))
        );
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(hex_to_rgb("#000")?, Rgb::BLACK);
        assert_eq!(
            triadic(Rgb::new(255, 0, 0)),
            [Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );

        assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), Rgb::BLACK);
        assert_eq!(cmyk_to_rgb(37.0, 5.0, 80.0, 100.0), Rgb::BLACK);

        assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 100.0), Rgb::WHITE);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)), Hsv::new(240.0, 100.0, 100.0));

        let all = convert_all(Rgb::new(255, 0, 0));
        assert_eq!(all.hex, "#FF0000");
        assert_eq!(all.cmyk, Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert_eq!(all.hsl, Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(all.hsv, Hsv::new(0.0, 100.0, 100.0));
        Ok(())
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(
            parse("12,34", "rgb"),
            Err(ConversionError::invalid(
                Format::Rgb,
                ColorFormatError::MissingCoordinate
            ))
        );
        assert_eq!(
            parse("xyz", "hex"),
            Err(ConversionError::invalid(
                Format::Hex,
                ColorFormatError::MalformedHex
            ))
        );
        assert_eq!(
            parse("1,2,3", "unknown"),
            Err(ConversionError::UnsupportedFormat("unknown".to_owned()))
        );
        assert!(matches!(
            parse("300, 0, 0", "rgb"),
            Err(ConversionError::OutOfRange(_))
        ));
        assert_eq!(
            parse("99999999999999999999, 0, 0", "rgb"),
            Err(ConversionError::invalid(
                Format::Rgb,
                ColorFormatError::OversizedCoordinate
            ))
        );
    }

    #[test]
    fn test_parse() -> Result<(), ConversionError> {
        assert_eq!(parse("  #1a2b3c  ", "HEX")?, Rgb::new(26, 43, 60));
        assert_eq!(parse("rgb(12 34 56)", "rgb")?, Rgb::new(12, 34, 56));
        assert_eq!(parse("0%, 0%, 0%, 0%", "cmyk")?, Rgb::WHITE);
        assert_eq!(parse("120°, 100%, 50%", "Hsl")?, Rgb::new(0, 255, 0));
        assert_eq!(parse("120, 100, 100", "hsv")?, Rgb::new(0, 255, 0));
        Ok(())
    }
}
