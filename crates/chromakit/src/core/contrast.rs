use super::conversion::from_24bit;
use super::math::FloatExt;
use crate::Float;

/// The coefficients for computing WCAG 2.x relative luminance from linear
/// sRGB coordinates.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The gamma-encoded value below which sRGB is linear, as specified by WCAG
/// 2.x. IEC 61966-2-1 uses 0.04045 instead, which makes no difference for
/// 8-bit channels.
const LINEAR_THRESHOLD: Float = 0.03928;

/// Compute the relative luminance for the given 24-bit sRGB coordinates.
pub(crate) fn to_relative_luminance(rgb: &[u8; 3]) -> Float {
    #[inline]
    fn linearize(value: Float) -> Float {
        if value <= LINEAR_THRESHOLD {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the contrast ratio between two relative luminance values, rounded
/// to two decimals.
///
/// Unlike perceptual contrast, the ratio is symmetric: it does not matter
/// which argument is text and which is background.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    ((lighter + 0.05) / (darker + 0.05)).round_to(2)
}
