//! WCAG 2.x relative luminance, contrast ratio, and conformance levels.
//!
//! The contrast ratio between two colors ranges from 1:1 for identical colors
//! to 21:1 for black and white. WCAG defines four thresholds for it, for
//! normal and large text at levels AA and AAA. [`classify`] checks a ratio
//! against all four.
//!
//! ```
//! # use chromakit::Rgb;
//! # use chromakit::wcag::{classify, contrast_ratio, Conformance};
//! let gray = Rgb::new(0x76, 0x76, 0x76);
//! let ratio = contrast_ratio(gray, Rgb::WHITE);
//! assert_eq!(ratio, 4.54);
//!
//! let rating = classify(ratio);
//! assert!(rating.aa_normal && rating.aa_large && rating.aaa_large);
//! assert!(!rating.aaa_normal);
//! assert_eq!(rating.level(), Conformance::Aa);
//! ```

use crate::core::{parse_hex, to_contrast_ratio, to_relative_luminance};
use crate::error::ConversionError;
use crate::model::Format;
use crate::{Float, Rgb};

/// The minimum contrast ratio for AA conformance with normal text.
pub const AA_NORMAL: Float = 4.5;

/// The minimum contrast ratio for AA conformance with large text.
pub const AA_LARGE: Float = 3.0;

/// The minimum contrast ratio for AAA conformance with normal text.
pub const AAA_NORMAL: Float = 7.0;

/// The minimum contrast ratio for AAA conformance with large text.
pub const AAA_LARGE: Float = 4.5;

/// Compute the WCAG relative luminance of the given color.
///
/// The result ranges from 0 for black to 1 for white.
pub fn relative_luminance(color: Rgb) -> Float {
    to_relative_luminance(color.as_ref())
}

/// Compute the WCAG contrast ratio between two colors, rounded to two
/// decimals.
///
/// The ratio is symmetric; the order of the arguments does not matter.
pub fn contrast_ratio(color1: Rgb, color2: Rgb) -> Float {
    to_contrast_ratio(relative_luminance(color1), relative_luminance(color2))
}

/// Classify the contrast ratio against the four WCAG thresholds.
pub fn classify(ratio: Float) -> WcagRating {
    WcagRating {
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Check the contrast between a foreground color and a background color
/// given in hexadecimal format.
///
/// Empty background text, after trimming whitespace, means white. This
/// function fails if the background is not a valid hexadecimal color.
pub fn check_contrast(foreground: Rgb, background: &str) -> Result<ContrastReport, ConversionError> {
    let background = background.trim();
    let background = if background.is_empty() {
        Rgb::WHITE
    } else {
        Rgb::from(parse_hex(background).map_err(|reason| ConversionError::invalid(Format::Hex, reason))?)
    };

    let ratio = contrast_ratio(foreground, background);
    Ok(ContrastReport {
        foreground,
        background,
        ratio,
        rating: classify(ratio),
    })
}

// ====================================================================================================================

/// The outcome of classifying a contrast ratio.
///
/// The four flags are independent: A ratio of 5.0 meets AA for normal and
/// large text as well as AAA for large text, but not AAA for normal text.
/// Nonetheless, meeting AAA for normal text implies meeting all other
/// thresholds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WcagRating {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl WcagRating {
    /// The canonical names of the four flags, in iteration order.
    pub const NAMES: [&'static str; 4] = ["AA_normal", "AA_large", "AAA_normal", "AAA_large"];

    /// Look up a flag by its canonical name, e.g., `AA_normal`.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.iter()
            .find(|(flag, _)| *flag == name)
            .map(|(_, value)| value)
    }

    /// Iterate over the canonical names and values of the four flags.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        Self::NAMES.into_iter().zip([
            self.aa_normal,
            self.aa_large,
            self.aaa_normal,
            self.aaa_large,
        ])
    }

    /// Summarize the rating as a single conformance level.
    ///
    /// The level is the best one met for normal text, falling back on AA for
    /// large text only.
    pub fn level(&self) -> Conformance {
        if self.aaa_normal {
            Conformance::Aaa
        } else if self.aa_normal {
            Conformance::Aa
        } else if self.aa_large {
            Conformance::AaLarge
        } else {
            Conformance::Fail
        }
    }
}

/// A summary conformance level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Conformance {
    /// Below AA even for large text.
    Fail,
    /// AA for large text only.
    AaLarge,
    /// AA for all text.
    Aa,
    /// AAA for all text.
    Aaa,
}

impl Conformance {
    /// Get a human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fail => "fails",
            Self::AaLarge => "AA large text",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl core::fmt::Display for Conformance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// The contrast between a foreground and a background color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContrastReport {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: Float,
    pub rating: WcagRating,
}

impl core::fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Ratio: {}:1 | {}",
            self.ratio,
            self.rating.level()
        ))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{check_contrast, classify, contrast_ratio, relative_luminance, Conformance};
    use crate::error::{ColorFormatError, ConversionError};
    use crate::model::Format;
    use crate::{assert_close_enough, Float, Rgb};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_rgb(rng: &mut StdRng) -> Rgb {
        Rgb::new(rng.random(), rng.random(), rng.random())
    }

    #[test]
    fn test_bounds() {
        assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
        assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0);
        assert_close_enough!(relative_luminance(Rgb::WHITE), 1.0);

        let mut rng = StdRng::seed_from_u64(0xc0ffee);
        for _ in 0..1_000 {
            let color = random_rgb(&mut rng);
            assert_eq!(contrast_ratio(color, color), 1.0);

            let other = random_rgb(&mut rng);
            let ratio = contrast_ratio(color, other);
            assert_eq!(ratio, contrast_ratio(other, color));
            assert!((1.0..=21.0).contains(&ratio), "ratio {} out of bounds", ratio);
        }
    }

    #[test]
    fn test_classify() {
        let rating = classify(5.0);
        assert!(rating.aa_normal && rating.aa_large && rating.aaa_large);
        assert!(!rating.aaa_normal);
        assert_eq!(rating.level(), Conformance::Aa);

        assert_eq!(classify(21.0).level(), Conformance::Aaa);
        assert_eq!(classify(7.0).level(), Conformance::Aaa);
        assert_eq!(classify(6.99).level(), Conformance::Aa);
        assert_eq!(classify(4.49).level(), Conformance::AaLarge);
        assert_eq!(classify(3.0).level(), Conformance::AaLarge);
        assert_eq!(classify(2.99).level(), Conformance::Fail);
        assert_eq!(classify(1.0), Default::default());

        let rating = classify(4.5);
        assert_eq!(rating.get("AA_normal"), Some(true));
        assert_eq!(rating.get("AAA_normal"), Some(false));
        assert_eq!(rating.get("AAA_large"), Some(true));
        assert_eq!(rating.get("nonsense"), None);
        assert_eq!(rating.iter().filter(|(_, value)| *value).count(), 3);
    }

    #[test]
    fn test_monotonicity() {
        for hundredths in 100_u16..=2_100 {
            let rating = classify(Float::from(hundredths) / 100.0);
            if rating.aaa_normal {
                assert!(rating.aa_normal && rating.aa_large && rating.aaa_large);
            }
            if rating.aa_normal {
                assert!(rating.aa_large && rating.aaa_large);
            }
            assert_eq!(rating.aa_normal, rating.aaa_large);
        }
    }

    #[test]
    fn test_check_contrast() -> Result<(), ConversionError> {
        let report = check_contrast(Rgb::BLACK, "")?;
        assert_eq!(report.background, Rgb::WHITE);
        assert_eq!(report.ratio, 21.0);
        assert_eq!(report.rating.level(), Conformance::Aaa);
        assert_eq!(report.to_string(), "Ratio: 21:1 | AAA");

        let report = check_contrast(Rgb::new(0x76, 0x76, 0x76), " #fff ")?;
        assert_eq!(report.to_string(), "Ratio: 4.54:1 | AA");

        assert_eq!(
            check_contrast(Rgb::BLACK, "#ffff"),
            Err(ConversionError::invalid(
                Format::Hex,
                ColorFormatError::UnexpectedLength
            ))
        );
        Ok(())
    }
}
