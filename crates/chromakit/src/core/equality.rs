use crate::core::math::{normalize_hue, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two RGB colors differ by at most the given
/// number of units in every channel.
///
/// # Panics
///
/// This macro panics if any channel differs by more than the tolerance. Its
/// message places the two colors below each other.
#[cfg(test)]
macro_rules! assert_channels_within {
    ($c1:expr, $c2:expr, $tolerance:expr $(,)?) => {
        let (c1, c2): ($crate::Rgb, $crate::Rgb) = ($c1, $c2);
        let within = c1
            .as_ref()
            .iter()
            .zip(c2.as_ref().iter())
            .all(|(a, b)| a.abs_diff(*b) <= $tolerance);
        assert!(
            within,
            "channels differ by more than {}:\n{:?}\n{:?}",
            $tolerance, c1, c2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_channels_within;

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Normalize cylindrical coordinates for equality testing and hashing.
///
/// The first coordinate is a hue in degrees and is reduced modulo 360 before
/// the usual normalization, so that 0° and 360° compare equal.
#[must_use = "function returns new coordinates and does not mutate original value"]
pub(crate) fn to_eq_hue_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    let [h, s, l] = *coordinates;
    let h = if h.is_nan() { 0.0 } else { normalize_hue(h) };
    [to_eq_bits(h), to_eq_bits(s), to_eq_bits(l)]
}
