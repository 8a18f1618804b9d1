use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation, and adds rounding to a fixed
/// number of decimals, which every conversion in this crate needs for its
/// output.
pub(crate) trait FloatExt: Sized {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to the given number of digits after the decimal.
    fn round_to(self, decimals: i32) -> Self;

    /// Round to the nearest integer and clamp to the range of a byte.
    fn to_channel(self) -> u8;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;

    #[inline]
    fn round_to(self, decimals: i32) -> f64 {
        let factor = 10.0_f64.powi(decimals);
        let rounded = (self * factor).round() / factor;
        // No negative zero, which would display as -0.0.
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    #[inline]
    fn to_channel(self) -> u8 {
        // NaN survives clamp() but casts to zero.
        self.round().clamp(0.0, 255.0) as u8
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn round_to(self, decimals: i32) -> f32 {
        let factor = 10.0_f32.powi(decimals);
        let rounded = (self * factor).round() / factor;
        // No negative zero, which would display as -0.0.
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    #[inline]
    fn to_channel(self) -> u8 {
        self.round().clamp(0.0, 255.0) as u8
    }
}

/// Normalize the hue to `0..360`.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid() may round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod test {
    use super::{normalize_hue, FloatExt};

    #[test]
    fn test_round_to() {
        assert_eq!(12.345_f64.round_to(1), 12.3);
        assert_eq!(12.35_f64.round_to(0), 12.0);
        assert_eq!(4.546_f64.round_to(2), 4.55);
        assert_eq!(99.96_f64.round_to(1), 100.0);
        assert!((-1e-17_f64).round_to(1).is_sign_positive());
    }

    #[test]
    fn test_to_channel() {
        assert_eq!(127.5_f64.to_channel(), 128);
        assert_eq!(255.4_f64.to_channel(), 255);
        assert_eq!(300.0_f64.to_channel(), 255);
        assert_eq!((-0.6_f64).to_channel(), 0);
        assert_eq!(f64::NAN.to_channel(), 0);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(390.0), 30.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
        assert!(normalize_hue(-1e-20) < 360.0);
    }
}
