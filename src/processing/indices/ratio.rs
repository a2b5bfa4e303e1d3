// src/processing/indices/ratio.rs
use anyhow::Result;
use ndarray::{Array, AsArray, Dimension};

use crate::processing::kernel::{map2, map3};

/// Simple Ratio
///
/// `SR = NIR / RED`
pub fn sr<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| nir / red)
}

/// Infrared Percentage Vegetation Index
///
/// `IPVI = NIR / (NIR + RED)`
pub fn ipvi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| {
        nir / (nir + red)
    })
}

/// Green Chlorophyll Index
///
/// `GCI = NIR / GREEN - 1`
pub fn gci<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("green", green.into()), ("nir", nir.into()), |green, nir| {
        nir / green - 1.0
    })
}

/// Chlorophyll Vegetation Index
///
/// `CVI = NIR * RED / GREEN^2`
pub fn cvi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("green", green.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        |green, red, nir| nir * red / (green * green),
    )
}

/// Structure Insensitive Pigment Index
///
/// `SIPI = (NIR - BLUE) / (NIR - RED)`
pub fn sipi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        |blue, red, nir| (nir - blue) / (nir - red),
    )
}

/// Temperature Vegetation Index
///
/// `TVX = LST / NDVI`
///
/// `thermal` is the land surface temperature band, in whatever unit the
/// caller wants the ratio expressed in.
pub fn tvx<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    thermal: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("red", red.into()),
        ("nir", nir.into()),
        ("thermal", thermal.into()),
        |red, nir, lst| lst / ((nir - red) / (nir + red)),
    )
}
