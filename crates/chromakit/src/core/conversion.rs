use super::math::{normalize_hue, FloatExt};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert unit-range coordinates to 24-bit representation.
///
/// Each coordinate is scaled by 255, rounded, and clamped to `0x00..=0xff`,
/// so slightly out-of-range intermediate results remain valid channels.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r * 255.0).to_channel(),
        (g * 255.0).to_channel(),
        (b * 255.0).to_channel(),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to CMYK percentages, each rounded to one decimal.
///
/// Pure black has no defined chromatic components and becomes
/// `[0, 0, 0, 100]`.
pub(crate) fn rgb_to_cmyk(rgb: &[u8; 3]) -> [Float; 4] {
    const BLACK: [Float; 4] = [0.0, 0.0, 0.0, 100.0];

    if *rgb == [0, 0, 0] {
        return BLACK;
    }

    let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);
    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return BLACK;
    }

    let white = 1.0 - k;
    let c = (1.0 - r - k) / white;
    let m = (1.0 - g - k) / white;
    let y = (1.0 - b - k) / white;

    [
        (c * 100.0).round_to(1),
        (m * 100.0).round_to(1),
        (y * 100.0).round_to(1),
        (k * 100.0).round_to(1),
    ]
}

/// Convert CMYK percentages to 24-bit RGB.
///
/// Percentages are not validated; out-of-range results are clamped.
pub(crate) fn cmyk_to_rgb(cmyk: &[Float; 4]) -> [u8; 3] {
    let [c, m, y, k] = cmyk.map(|p| p / 100.0);
    let white = 1.0 - k;

    to_24bit(&[(1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white])
}

// --------------------------------------------------------------------------------------------------------------------

/// The channel extrema shared by the HSL and HSV conversions.
struct Extrema {
    r: Float,
    g: Float,
    b: Float,
    max: Float,
    min: Float,
}

impl Extrema {
    fn new(rgb: &[u8; 3]) -> Self {
        let [r, g, b] = from_24bit(rgb[0], rgb[1], rgb[2]);
        Self {
            r,
            g,
            b,
            max: r.max(g).max(b),
            min: r.min(g).min(b),
        }
    }

    #[inline]
    fn delta(&self) -> Float {
        self.max - self.min
    }

    /// Compute the hue in degrees with the 60° sector formula.
    ///
    /// The sector is determined by the maximum channel, checked in order red,
    /// green, blue. Achromatic colors have hue zero.
    fn hue(&self) -> Float {
        let delta = self.delta();
        if delta == 0.0 {
            0.0
        } else if self.max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if self.max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        }
    }
}

/// Round the hue, saturation, and lightness or value to one decimal.
///
/// The hue may round up to 360.0, which is normalized back to zero.
#[inline]
fn round_cylindrical(hue: Float, saturation: Float, third: Float) -> [Float; 3] {
    [
        normalize_hue(hue.round_to(1)),
        (saturation * 100.0).round_to(1),
        (third * 100.0).round_to(1),
    ]
}

/// Convert 24-bit RGB to HSL with hue in degrees and percentages for
/// saturation and lightness.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let extrema = Extrema::new(rgb);
    let lightness = (extrema.max + extrema.min) / 2.0;
    let delta = extrema.delta();

    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    round_cylindrical(extrema.hue(), saturation, lightness)
}

/// Convert 24-bit RGB to HSV with hue in degrees and percentages for
/// saturation and value.
pub(crate) fn rgb_to_hsv(rgb: &[u8; 3]) -> [Float; 3] {
    let extrema = Extrema::new(rgb);
    let value = extrema.max;

    let saturation = if extrema.max == 0.0 {
        0.0
    } else {
        extrema.delta() / extrema.max
    };

    round_cylindrical(extrema.hue(), saturation, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// A component of the intermediate RGB′ triple: chroma, the second largest
/// component, or zero.
#[derive(Clone, Copy)]
enum Part {
    C,
    X,
    O,
}

/// The assignment of parts to red, green, and blue for each 60° sector.
const SECTORS: [[Part; 3]; 6] = {
    use Part::*;
    [
        [C, X, O], // [0, 60)
        [X, C, O], // [60, 120)
        [O, C, X], // [120, 180)
        [O, X, C], // [180, 240)
        [X, O, C], // [240, 300)
        [C, O, X], // [300, 360)
    ]
};

/// Map chroma and hue to the intermediate RGB′ triple plus the given offset,
/// then to 24-bit RGB.
fn from_chroma_hue(chroma: Float, hue: Float, offset: Float) -> [u8; 3] {
    let hue = normalize_hue(hue);
    let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());

    // Hue is in 0..360, so the sector index is in 0..6.
    let sector = ((hue / 60.0) as usize).min(5);
    let select = |part: Part| {
        offset
            + match part {
                Part::C => chroma,
                Part::X => x,
                Part::O => 0.0,
            }
    };

    let [r, g, b] = SECTORS[sector];
    to_24bit(&[select(r), select(g), select(b)])
}

/// Convert HSL with hue in degrees and percentages for saturation and
/// lightness to 24-bit RGB.
///
/// The hue is reduced modulo 360. Saturation and lightness are not
/// validated; out-of-range results are clamped.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [h, s, l] = *hsl;
    let (s, l) = (s / 100.0, l / 100.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_chroma_hue(chroma, h, l - chroma / 2.0)
}

/// Convert HSV with hue in degrees and percentages for saturation and value
/// to 24-bit RGB.
///
/// The hue is reduced modulo 360. Saturation and value are not validated;
/// out-of-range results are clamped.
pub(crate) fn hsv_to_rgb(hsv: &[Float; 3]) -> [u8; 3] {
    let [h, s, v] = *hsv;
    let (s, v) = (s / 100.0, v / 100.0);

    let chroma = v * s;
    from_chroma_hue(chroma, h, v - chroma)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk(&[0, 0, 0]), [0.0, 0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_cmyk(&[255, 255, 255]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_cmyk(&[255, 0, 0]), [0.0, 100.0, 100.0, 0.0]);
        assert_eq!(rgb_to_cmyk(&[0, 128, 64]), [100.0, 0.0, 50.0, 49.8]);

        assert_eq!(cmyk_to_rgb(&[0.0, 0.0, 0.0, 100.0]), [0, 0, 0]);
        assert_eq!(cmyk_to_rgb(&[0.0, 100.0, 100.0, 0.0]), [255, 0, 0]);
        assert_eq!(cmyk_to_rgb(&[100.0, 0.0, 50.0, 49.8]), [0, 128, 64]);

        // Out-of-range percentages clamp rather than wrap.
        assert_eq!(cmyk_to_rgb(&[150.0, -50.0, 0.0, 0.0]), [0, 255, 255]);
    }

    #[test]
    fn test_hsl() {
        assert_eq!(rgb_to_hsl(&[255, 255, 255]), [0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_hsl(&[0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl(&[255, 0, 0]), [0.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(&[0, 255, 0]), [120.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(&[0, 0, 255]), [240.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(&[255, 0, 255]), [300.0, 100.0, 50.0]);

        let [h, s, l] = rgb_to_hsl(&[26, 43, 60]);
        assert_close_enough!(h, 210.0);
        assert_close_enough!(s, 39.5);
        assert_close_enough!(l, 16.9);

        assert_eq!(hsl_to_rgb(&[0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(&[120.0, 100.0, 50.0]), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(&[240.0, 100.0, 50.0]), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(&[60.0, 100.0, 50.0]), [255, 255, 0]);
        assert_eq!(hsl_to_rgb(&[180.0, 100.0, 50.0]), [0, 255, 255]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 100.0]), [255, 255, 255]);
    }

    #[test]
    fn test_hsv() {
        assert_eq!(rgb_to_hsv(&[0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv(&[255, 255, 255]), [0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_hsv(&[255, 0, 0]), [0.0, 100.0, 100.0]);
        assert_eq!(rgb_to_hsv(&[0, 128, 0]), [120.0, 100.0, 50.2]);

        assert_eq!(hsv_to_rgb(&[0.0, 100.0, 100.0]), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(&[300.0, 100.0, 100.0]), [255, 0, 255]);
        assert_eq!(hsv_to_rgb(&[120.0, 100.0, 50.2]), [0, 128, 0]);
        assert_eq!(hsv_to_rgb(&[42.0, 0.0, 0.0]), [0, 0, 0]);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_rgb(&[480.0, 100.0, 50.0]), hsl_to_rgb(&[120.0, 100.0, 50.0]));
        assert_eq!(hsl_to_rgb(&[360.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(&[-120.0, 100.0, 100.0]), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(&[359.9, 100.0, 100.0]), [255, 0, 0]);
    }

    #[test]
    fn test_round_trips() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let rgb = [r as u8, g as u8, b as u8];
                    for (label, actual) in [
                        ("cmyk", cmyk_to_rgb(&rgb_to_cmyk(&rgb))),
                        ("hsl", hsl_to_rgb(&rgb_to_hsl(&rgb))),
                        ("hsv", hsv_to_rgb(&rgb_to_hsv(&rgb))),
                    ] {
                        let within = rgb.iter().zip(actual.iter()).all(|(a, b)| a.abs_diff(*b) <= 1);
                        assert!(within, "{} round trip of {:?} yields {:?}", label, rgb, actual);
                    }
                }
            }
        }
    }
}
