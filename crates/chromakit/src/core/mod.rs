mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_relative_luminance};

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_channels_within;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_hue_coordinates;

// math
pub(crate) use math::normalize_hue;

// string
pub(crate) use string::{format_hex, parse_hex, scan_integers, scan_numbers};
