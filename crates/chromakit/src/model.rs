//! The five color representations and the aggregate of all of them.
//!
//! [`Rgb`] is the canonical representation; every other representation is
//! derived from it or reduced to it. [`Cmyk`], [`Hsl`], and [`Hsv`] hold
//! floating point percentages and degrees, whereas HEX is just a string, as
//! produced by [`Rgb as Display`](struct.Rgb.html#impl-Display-for-Rgb).
//! [`Format`] names the five representations and parses text into colors.

use crate::core::{
    cmyk_to_rgb, format_hex, hsl_to_rgb, hsv_to_rgb, parse_hex, rgb_to_cmyk, rgb_to_hsl,
    rgb_to_hsv, scan_integers, scan_numbers, to_eq_bits, to_eq_hue_coordinates,
};
use crate::error::{ConversionError, OutOfBoundsError};
use crate::Float;

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit RGB color.
///
/// All three channels are bytes and hence guaranteed to be in `0..=255`. To
/// create a color from wider, possibly out-of-range integers, use
/// [`Rgb::try_new`].
///
/// ```
/// # use chromakit::Rgb;
/// let teal = Rgb::new(0x1a, 0x2b, 0x3c);
/// assert_eq!(teal.as_ref(), &[26_u8, 43, 60]);
/// assert_eq!(teal[2], 60);
/// assert_eq!(teal.to_string(), "#1A2B3C");
/// assert_eq!("#1a2b3c".parse::<Rgb>()?, teal);
/// # Ok::<(), chromakit::error::ConversionError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #1a2b3c;"></div>
/// </div>
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Pure white.
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color from channels that may be out of range.
    ///
    /// This associated function fails with an [`OutOfBoundsError`] for the
    /// first channel outside `0..=255`.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self, OutOfBoundsError> {
        fn channel(value: i64) -> Result<u8, OutOfBoundsError> {
            u8::try_from(value).map_err(|_| OutOfBoundsError::new(value, 0..=255))
        }

        Ok(Self([channel(r)?, channel(g)?, channel(b)?]))
    }

    /// Get the red channel.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Get the green channel.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue channel.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Format this color as uppercase hashed hexadecimal, e.g., `#FF0000`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk(rgb_to_cmyk(&self.0))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl(rgb_to_hsl(&self.0))
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> Hsv {
        Hsv(rgb_to_hsv(&self.0))
    }

    /// Convert this color to all five representations at once.
    pub fn convert_all(&self) -> Conversions {
        Conversions {
            hex: self.to_hex(),
            rgb: *self,
            cmyk: self.to_cmyk(),
            hsl: self.to_hsl(),
            hsv: self.to_hsv(),
        }
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(value: Rgb) -> Self {
        let [r, g, b] = value.0;
        (r, g, b)
    }
}

impl core::str::FromStr for Rgb {
    type Err = ConversionError;

    /// Parse a color in hexadecimal format with optional `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::Hex.parse(s)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_hex(&self.0, f)
    }
}

// ====================================================================================================================
// Cmyk
// ====================================================================================================================

/// A color in the subtractive CMYK model.
///
/// The four coordinates are cyan, magenta, yellow, and key (black), each a
/// percentage nominally in `0..=100`. Colors converted from [`Rgb`] have
/// coordinates rounded to one decimal. Colors created with [`Cmyk::new`] are
/// not validated; converting them to RGB clamps the result instead.
///
/// CMYK is not a bijection with RGB: every color with `K = 100` is black.
///
/// ```
/// # use chromakit::{Cmyk, Rgb};
/// let orange = Rgb::new(255, 128, 0).to_cmyk();
/// assert_eq!(orange, Cmyk::new(0.0, 49.8, 100.0, 0.0));
/// assert_eq!(orange.to_string(), "0.0%, 49.8%, 100.0%, 0.0%");
/// assert_eq!(Rgb::from(orange), Rgb::new(255, 128, 0));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Cmyk([Float; 4]);

impl Cmyk {
    /// Create a new CMYK color from its percentages.
    pub const fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self([c, m, y, k])
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(cmyk_to_rgb(&self.0))
    }
}

impl AsRef<[Float; 4]> for Cmyk {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl PartialEq for Cmyk {
    fn eq(&self, other: &Self) -> bool {
        self.0.map(to_eq_bits) == other.0.map(to_eq_bits)
    }
}

impl Eq for Cmyk {}

impl core::hash::Hash for Cmyk {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.map(to_eq_bits).hash(state);
    }
}

impl core::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [c, m, y, k] = self.0;
        f.write_fmt(format_args!("{:.1}%, {:.1}%, {:.1}%, {:.1}%", c, m, y, k))
    }
}

// ====================================================================================================================
// Hsl and Hsv
// ====================================================================================================================

/// Define a cylindrical color representation with hue in degrees and two
/// percentages. Both HSL and HSV share the same shape, equality, hashing, and
/// display; they differ only in the conversions from and to RGB.
macro_rules! cylindrical {
    ($name:ident, $third:ident, $from_rgb:ident, $to_rgb:ident) => {
        impl $name {
            /// Create a new color from hue in degrees and two percentages.
            pub const fn new(h: Float, s: Float, $third: Float) -> Self {
                Self([h, s, $third])
            }

            /// Get the hue in degrees.
            pub const fn hue(&self) -> Float {
                self.0[0]
            }

            /// Get the saturation in percent.
            pub const fn saturation(&self) -> Float {
                self.0[1]
            }

            /// Create a new color with the same saturation and lightness or
            /// value, but the hue rotated by the given degrees.
            ///
            /// The resulting hue is normalized to `0..360`.
            #[must_use = "method returns a new color and does not mutate original value"]
            pub fn rotate(&self, degrees: Float) -> Self {
                let [h, s, x] = self.0;
                Self([crate::core::normalize_hue(h + degrees), s, x])
            }

            /// Convert this color to RGB.
            pub fn to_rgb(&self) -> Rgb {
                Rgb($to_rgb(&self.0))
            }
        }

        impl AsRef<[Float; 3]> for $name {
            fn as_ref(&self) -> &[Float; 3] {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                to_eq_hue_coordinates(&self.0) == to_eq_hue_coordinates(&other.0)
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                to_eq_hue_coordinates(&self.0).hash(state);
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let [h, s, x] = self.0;
                f.write_fmt(format_args!("{:.1}°, {:.1}%, {:.1}%", h, s, x))
            }
        }

        impl From<Rgb> for $name {
            fn from(value: Rgb) -> Self {
                Self($from_rgb(value.as_ref()))
            }
        }

        impl From<$name> for Rgb {
            fn from(value: $name) -> Self {
                value.to_rgb()
            }
        }
    };
}

/// A color in the HSL model: hue in degrees `0..360`, saturation and
/// lightness as percentages.
///
/// ```
/// # use chromakit::{Hsl, Rgb};
/// let red = Rgb::new(255, 0, 0).to_hsl();
/// assert_eq!(red, Hsl::new(0.0, 100.0, 50.0));
/// assert_eq!(red, Hsl::new(360.0, 100.0, 50.0));
/// assert_eq!(red.to_string(), "0.0°, 100.0%, 50.0%");
/// assert_eq!(red.rotate(120.0).to_rgb(), Rgb::new(0, 255, 0));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Hsl([Float; 3]);

impl Hsl {
    /// Get the lightness in percent.
    pub const fn lightness(&self) -> Float {
        self.0[2]
    }
}

cylindrical!(Hsl, l, rgb_to_hsl, hsl_to_rgb);

/// A color in the HSV model: hue in degrees `0..360`, saturation and value as
/// percentages.
///
/// ```
/// # use chromakit::{Hsv, Rgb};
/// let navy = Rgb::new(0, 0, 128).to_hsv();
/// assert_eq!(navy, Hsv::new(240.0, 100.0, 50.2));
/// assert_eq!(Rgb::from(navy), Rgb::new(0, 0, 128));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Hsv([Float; 3]);

impl Hsv {
    /// Get the value in percent.
    pub const fn value(&self) -> Float {
        self.0[2]
    }
}

cylindrical!(Hsv, v, rgb_to_hsv, hsv_to_rgb);

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        value.to_cmyk()
    }
}

impl From<Cmyk> for Rgb {
    fn from(value: Cmyk) -> Self {
        value.to_rgb()
    }
}

// ====================================================================================================================
// Conversions
// ====================================================================================================================

/// A color in all five representations.
///
/// This is the result of [`convert_all`](crate::convert_all), which populates
/// every result field from one canonical RGB color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conversions {
    pub hex: String,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
    pub hsl: Hsl,
    pub hsv: Hsv,
}

impl Conversions {
    /// Render the representation for the given format as text.
    ///
    /// HEX renders as `#1A2B3C`, RGB as comma-separated channels `26, 43,
    /// 60`, and the other three with units, e.g., `210.0°, 39.5%, 16.9%`.
    pub fn text(&self, format: Format) -> String {
        match format {
            Format::Hex => self.hex.clone(),
            Format::Rgb => {
                let [r, g, b] = self.rgb.0;
                format!("{}, {}, {}", r, g, b)
            }
            Format::Cmyk => self.cmyk.to_string(),
            Format::Hsl => self.hsl.to_string(),
            Format::Hsv => self.hsv.to_string(),
        }
    }
}

// ====================================================================================================================
// Format
// ====================================================================================================================

/// The five color formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Rgb,
    Cmyk,
    Hsl,
    Hsv,
}

impl Format {
    /// All formats in display order.
    pub const ALL: [Format; 5] = [
        Format::Hex,
        Format::Rgb,
        Format::Cmyk,
        Format::Hsl,
        Format::Hsv,
    ];

    /// Get the format's tag, which is its lowercase name.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Cmyk => "cmyk",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }

    /// Get the format's human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
        }
    }

    /// Get a hint describing the expected input for this format.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Hex => "#RRGGBB or #RGB",
            Self::Rgb => "R, G, B (0-255)",
            Self::Cmyk => "C, M, Y, K (0-100%)",
            Self::Hsl => "H (0-360), S, L (0-100%)",
            Self::Hsv => "H (0-360), S, V (0-100%)",
        }
    }

    /// Parse the text as a color in this format.
    ///
    /// Surrounding whitespace is ignored. HEX text must have 3 or 6 digits
    /// with optional leading `#`. RGB text must contain exactly 3 integers,
    /// each in `0..=255`. CMYK text must contain exactly 4 numbers and HSL
    /// and HSV text exactly 3 numbers; these numbers are not range-checked,
    /// with the conversion to RGB clamping the result instead. Numbers may be
    /// separated and surrounded by arbitrary other characters such as commas,
    /// parentheses, `%`, or `°`.
    pub fn parse(&self, text: &str) -> Result<Rgb, ConversionError> {
        let text = text.trim();
        let invalid = |reason| ConversionError::invalid(*self, reason);

        match self {
            Self::Hex => parse_hex(text).map(Rgb).map_err(invalid),
            Self::Rgb => {
                let [r, g, b] = scan_integers::<3>(text).map_err(invalid)?;
                Ok(Rgb::try_new(r.into(), g.into(), b.into())?)
            }
            Self::Cmyk => Ok(Rgb(cmyk_to_rgb(&scan_numbers::<4>(text).map_err(invalid)?))),
            Self::Hsl => Ok(Rgb(hsl_to_rgb(&scan_numbers::<3>(text).map_err(invalid)?))),
            Self::Hsv => Ok(Rgb(hsv_to_rgb(&scan_numbers::<3>(text).map_err(invalid)?))),
        }
    }
}

impl core::str::FromStr for Format {
    type Err = ConversionError;

    /// Resolve a format tag. Tags are matched ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ConversionError::UnsupportedFormat(s.to_owned()))
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Cmyk, Format, Hsl, Hsv, Rgb};
    use crate::core::assert_channels_within;
    use crate::error::{ColorFormatError, ConversionError, OutOfBoundsError};
    use std::collections::HashSet;

    #[test]
    fn test_rgb() -> Result<(), ConversionError> {
        assert_eq!(Rgb::try_new(1, 2, 3)?, Rgb::new(1, 2, 3));
        assert_eq!(
            Rgb::try_new(0, 256, -1),
            Err(OutOfBoundsError::new(256, 0..=255))
        );
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(<(u8, u8, u8)>::from(Rgb::new(4, 5, 6)), (4, 5, 6));
        assert_eq!("abc".parse::<Rgb>()?, Rgb::new(0xaa, 0xbb, 0xcc));
        Ok(())
    }

    #[test]
    fn test_equality() {
        assert_eq!(Hsl::new(0.0, 50.0, 50.0), Hsl::new(360.0, 50.0, 50.0));
        assert_eq!(Hsv::new(-90.0, 50.0, 50.0), Hsv::new(270.0, 50.0, 50.0));
        assert_ne!(Hsl::new(10.0, 50.0, 50.0), Hsl::new(10.0, 50.0, 50.1));
        assert_eq!(Cmyk::new(0.1 + 0.2, 0.0, 0.0, 0.0), Cmyk::new(0.3, 0.0, -0.0, 0.0));

        let set: HashSet<Hsl> = [Hsl::new(0.0, 1.0, 2.0), Hsl::new(360.0, 1.0, 2.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        let all = Rgb::new(26, 43, 60).convert_all();
        assert_eq!(all.text(Format::Hex), "#1A2B3C");
        assert_eq!(all.text(Format::Rgb), "26, 43, 60");
        assert_eq!(all.text(Format::Cmyk), "56.7%, 28.3%, 0.0%, 76.5%");
        assert_eq!(all.text(Format::Hsl), "210.0°, 39.5%, 16.9%");
        assert_eq!(all.text(Format::Hsv), "210.0°, 56.7%, 23.5%");
    }

    #[test]
    fn test_format_tags() -> Result<(), ConversionError> {
        for format in Format::ALL {
            assert_eq!(format.tag().parse::<Format>()?, format);
            assert_eq!(format.name().parse::<Format>()?, format);
        }
        assert_eq!(" HSV ".parse::<Format>()?, Format::Hsv);
        assert_eq!(
            "lab".parse::<Format>(),
            Err(ConversionError::UnsupportedFormat("lab".to_owned()))
        );
        assert_eq!(Format::Hsv.hint(), "H (0-360), S, V (0-100%)");
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ConversionError> {
        assert_eq!(Format::Hex.parse("  #1A2B3C ")?, Rgb::new(26, 43, 60));
        assert_eq!(Format::Rgb.parse("rgb(12 34 56)")?, Rgb::new(12, 34, 56));
        assert_eq!(Format::Rgb.parse("255,255,255")?, Rgb::WHITE);
        assert_eq!(
            Format::Cmyk.parse("0%, 100%, 100%, 0%")?,
            Rgb::new(255, 0, 0)
        );
        assert_eq!(Format::Hsl.parse("120°, 100%, 50%")?, Rgb::new(0, 255, 0));
        assert_eq!(Format::Hsv.parse("240, 100, 100")?, Rgb::new(0, 0, 255));

        // No range checks beyond RGB; the conversion clamps.
        assert_eq!(Format::Cmyk.parse("0, 0, 0, 250")?, Rgb::BLACK);
        assert_eq!(Format::Hsl.parse("0, 0, 150")?, Rgb::WHITE);
        assert_eq!(Format::Hsl.parse("480, 100, 50")?, Rgb::new(0, 255, 0));

        assert_eq!(
            Format::Rgb.parse("300, 0, 0"),
            Err(ConversionError::OutOfRange(OutOfBoundsError::new(
                300,
                0..=255
            )))
        );
        assert_eq!(
            Format::Rgb.parse("12,34"),
            Err(ConversionError::invalid(
                Format::Rgb,
                ColorFormatError::MissingCoordinate
            ))
        );
        assert_eq!(
            Format::Cmyk.parse("10, 20, 30"),
            Err(ConversionError::invalid(
                Format::Cmyk,
                ColorFormatError::MissingCoordinate
            ))
        );
        assert_eq!(
            Format::Hsv.parse("1, 2, 3, 4"),
            Err(ConversionError::invalid(
                Format::Hsv,
                ColorFormatError::TooManyCoordinates
            ))
        );
        assert_eq!(
            Format::Hex.parse("xyz"),
            Err(ConversionError::invalid(
                Format::Hex,
                ColorFormatError::MalformedHex
            ))
        );
        Ok(())
    }

    #[test]
    fn test_text_round_trips() -> Result<(), ConversionError> {
        for rgb in [
            Rgb::new(26, 43, 60),
            Rgb::new(255, 128, 0),
            Rgb::new(3, 201, 77),
            Rgb::new(128, 128, 128),
        ] {
            let all = rgb.convert_all();
            for format in Format::ALL {
                let parsed = format.parse(&all.text(format))?;
                assert_channels_within!(parsed, rgb, 1);
            }
        }
        Ok(())
    }
}
