//! Python functions for the `chromakit` extension module.
//!
//! Colors cross the boundary as tuples: `(r, g, b)` for RGB, `(c, m, y, k)`
//! for CMYK, and `(h, s, l)` or `(h, s, v)` for HSL and HSV. RGB tuples coming
//! from Python are range-checked, since Python integers may be arbitrarily
//! large or negative.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::ConversionError;
use crate::{Float, Rgb};

type RgbTuple = (u8, u8, u8);

fn to_rgb((r, g, b): (i64, i64, i64)) -> Result<Rgb, ConversionError> {
    Ok(Rgb::try_new(r, g, b)?)
}

fn to_tuple3(coordinates: &[Float; 3]) -> (Float, Float, Float) {
    let [x, y, z] = *coordinates;
    (x, y, z)
}

#[pyfunction]
fn hex_to_rgb(text: &str) -> PyResult<RgbTuple> {
    Ok(crate::hex_to_rgb(text)?.into())
}

#[pyfunction]
fn rgb_to_hex(r: i64, g: i64, b: i64) -> PyResult<String> {
    Ok(crate::rgb_to_hex(r, g, b)?)
}

#[pyfunction]
fn rgb_to_cmyk(rgb: (i64, i64, i64)) -> PyResult<(Float, Float, Float, Float)> {
    let [c, m, y, k] = *to_rgb(rgb)?.to_cmyk().as_ref();
    Ok((c, m, y, k))
}

#[pyfunction]
fn cmyk_to_rgb(c: Float, m: Float, y: Float, k: Float) -> RgbTuple {
    crate::cmyk_to_rgb(c, m, y, k).into()
}

#[pyfunction]
fn rgb_to_hsl(rgb: (i64, i64, i64)) -> PyResult<(Float, Float, Float)> {
    Ok(to_tuple3(to_rgb(rgb)?.to_hsl().as_ref()))
}

#[pyfunction]
fn hsl_to_rgb(h: Float, s: Float, l: Float) -> RgbTuple {
    crate::hsl_to_rgb(h, s, l).into()
}

#[pyfunction]
fn rgb_to_hsv(rgb: (i64, i64, i64)) -> PyResult<(Float, Float, Float)> {
    Ok(to_tuple3(to_rgb(rgb)?.to_hsv().as_ref()))
}

#[pyfunction]
fn hsv_to_rgb(h: Float, s: Float, v: Float) -> RgbTuple {
    crate::hsv_to_rgb(h, s, v).into()
}

/// Convert the color to a dictionary with keys `hex`, `rgb`, `cmyk`, `hsl`,
/// and `hsv`.
#[pyfunction]
fn convert_all(py: Python<'_>, rgb: (i64, i64, i64)) -> PyResult<Bound<'_, PyDict>> {
    let all = to_rgb(rgb)?.convert_all();
    let [c, m, y, k] = *all.cmyk.as_ref();

    let dict = PyDict::new(py);
    dict.set_item("hex", &all.hex)?;
    dict.set_item("rgb", RgbTuple::from(all.rgb))?;
    dict.set_item("cmyk", (c, m, y, k))?;
    dict.set_item("hsl", to_tuple3(all.hsl.as_ref()))?;
    dict.set_item("hsv", to_tuple3(all.hsv.as_ref()))?;
    Ok(dict)
}

/// Parse the text as a color in the format with the given tag.
#[pyfunction]
fn parse(text: &str, format: &str) -> PyResult<RgbTuple> {
    Ok(crate::parse(text, format)?.into())
}

#[pyfunction]
fn complementary(rgb: (i64, i64, i64)) -> PyResult<RgbTuple> {
    Ok(crate::complementary(to_rgb(rgb)?).into())
}

#[pyfunction]
fn triadic(rgb: (i64, i64, i64)) -> PyResult<Vec<RgbTuple>> {
    Ok(crate::triadic(to_rgb(rgb)?).map(RgbTuple::from).to_vec())
}

#[pyfunction]
fn analogous(rgb: (i64, i64, i64)) -> PyResult<Vec<RgbTuple>> {
    Ok(crate::analogous(to_rgb(rgb)?).map(RgbTuple::from).to_vec())
}

#[pyfunction]
fn split_complementary(rgb: (i64, i64, i64)) -> PyResult<Vec<RgbTuple>> {
    Ok(crate::split_complementary(to_rgb(rgb)?)
        .map(RgbTuple::from)
        .to_vec())
}

#[pyfunction]
fn relative_luminance(rgb: (i64, i64, i64)) -> PyResult<Float> {
    Ok(crate::relative_luminance(to_rgb(rgb)?))
}

#[pyfunction]
fn contrast_ratio(rgb1: (i64, i64, i64), rgb2: (i64, i64, i64)) -> PyResult<Float> {
    Ok(crate::contrast_ratio(to_rgb(rgb1)?, to_rgb(rgb2)?))
}

/// Classify the contrast ratio as a dictionary with keys `AA_normal`,
/// `AA_large`, `AAA_normal`, and `AAA_large`.
#[pyfunction]
fn wcag_rating(py: Python<'_>, ratio: Float) -> PyResult<Bound<'_, PyDict>> {
    let dict = PyDict::new(py);
    for (name, value) in crate::classify(ratio).iter() {
        dict.set_item(name, value)?;
    }
    Ok(dict)
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // ------------------------------------------------------------------ conversion
    m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_cmyk, m)?)?;
    m.add_function(wrap_pyfunction!(cmyk_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hsv, m)?)?;
    m.add_function(wrap_pyfunction!(hsv_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(convert_all, m)?)?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;

    // --------------------------------------------------------------------- harmony
    m.add_function(wrap_pyfunction!(complementary, m)?)?;
    m.add_function(wrap_pyfunction!(triadic, m)?)?;
    m.add_function(wrap_pyfunction!(analogous, m)?)?;
    m.add_function(wrap_pyfunction!(split_complementary, m)?)?;

    // ------------------------------------------------------------------------ wcag
    m.add_function(wrap_pyfunction!(relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(wcag_rating, m)?)?;

    Ok(())
}
