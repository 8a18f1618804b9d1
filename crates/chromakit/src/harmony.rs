//! Color harmonies, derived by rotating the hue of a base color.
//!
//! All harmonies convert the base color to [`Hsl`](crate::Hsl), rotate the
//! hue while keeping saturation and lightness, and convert back to
//! [`Rgb`]. Because the HSL representation is rounded to one decimal, the
//! results are exact only up to rounding, i.e., within one unit per channel.
//!
//! ```
//! # use chromakit::Rgb;
//! # use chromakit::harmony::{complementary, triadic};
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(complementary(red), Rgb::new(0, 255, 255));
//! assert_eq!(triadic(red), [Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]);
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #ff0000;"></div>
//! <div style="background-color: #00ffff;"></div>
//! <div style="background-color: #00ff00;"></div>
//! <div style="background-color: #0000ff;"></div>
//! </div>

use crate::{Float, Rgb};

/// Rotate the hue of the given color by the given degrees.
///
/// Negative rotations and rotations of more than a full turn are fine; the
/// resulting hue is normalized to `0..360`. Rotating by 360° is a no-op, up to
/// rounding.
pub fn rotate_hue(color: Rgb, degrees: Float) -> Rgb {
    color.to_hsl().rotate(degrees).to_rgb()
}

/// Rotate the hue of the given color by each of the given degrees.
fn rotate_each<const N: usize>(color: Rgb, offsets: [Float; N]) -> [Rgb; N] {
    let hsl = color.to_hsl();
    offsets.map(|degrees| hsl.rotate(degrees).to_rgb())
}

/// Determine the complementary color, opposite on the hue circle.
pub fn complementary(color: Rgb) -> Rgb {
    rotate_hue(color, 180.0)
}

/// Determine the two colors that form an equilateral triangle with the given
/// color on the hue circle, at +120° and +240°.
pub fn triadic(color: Rgb) -> [Rgb; 2] {
    rotate_each(color, [120.0, 240.0])
}

/// Determine the two neighbors of the given color on the hue circle, at −30°
/// and +30°.
pub fn analogous(color: Rgb) -> [Rgb; 2] {
    rotate_each(color, [-30.0, 30.0])
}

/// Determine the two neighbors of the complementary color, at +150° and
/// +210°.
pub fn split_complementary(color: Rgb) -> [Rgb; 2] {
    rotate_each(color, [150.0, 210.0])
}

/// Determine the palette of swatches for previewing a color: the color itself,
/// its complementary color, both analogous colors, and the first triadic
/// color.
pub fn preview_palette(color: Rgb) -> [Rgb; 5] {
    let [analogous1, analogous2] = analogous(color);
    let [triadic1, _] = triadic(color);
    [
        color,
        complementary(color),
        analogous1,
        analogous2,
        triadic1,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// The supported color harmonies.
///
/// This enumeration helps presentation layers that let users pick a harmony
/// at runtime. Each harmony is characterized by its hue offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
}

impl Harmony {
    /// All harmonies.
    pub const ALL: [Harmony; 4] = [
        Harmony::Complementary,
        Harmony::Triadic,
        Harmony::Analogous,
        Harmony::SplitComplementary,
    ];

    /// Get the harmony's human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Get the hue offsets in degrees, in the order of the colors returned by
    /// [`Harmony::apply`].
    pub const fn offsets(&self) -> &'static [Float] {
        match self {
            Self::Complementary => &[180.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::SplitComplementary => &[150.0, 210.0],
        }
    }

    /// Apply this harmony to the given color.
    ///
    /// The base color itself is not included in the result.
    pub fn apply(&self, color: Rgb) -> Vec<Rgb> {
        let hsl = color.to_hsl();
        self.offsets()
            .iter()
            .map(|degrees| hsl.rotate(*degrees).to_rgb())
            .collect()
    }
}

impl core::fmt::Display for Harmony {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
