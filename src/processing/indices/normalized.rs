// src/processing/indices/normalized.rs
//! Normalized difference indices: `(A - B) / (A + B)` and close variants.
//!
//! Division by zero is not intercepted; a zero denominator yields NaN or
//! ±Inf in the affected pixels.
use anyhow::Result;
use ndarray::{Array, AsArray, Dimension};

use crate::processing::kernel::{map2, map3};

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - RED) / (NIR + RED)`
///
/// -1.0..-0.1 water, -0.1..0.1 barren rock/sand/snow, 0.2..0.4 shrub and
/// grassland, 0.4..1.0 temperate and tropical forest.
pub fn ndvi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| {
        (nir - red) / (nir + red)
    })
}

/// Green Normalized Difference Vegetation Index
///
/// `GNDVI = (NIR - GREEN) / (NIR + GREEN)`
///
/// More sensitive to chlorophyll concentration than NDVI.
pub fn gndvi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("green", green.into()), ("nir", nir.into()), |green, nir| {
        (nir - green) / (nir + green)
    })
}

/// Green Red Vegetation Index, also published as VNDVI
///
/// `GRVI = (GREEN - RED) / (GREEN + RED)`
pub fn grvi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("green", green.into()), ("red", red.into()), |green, red| {
        (green - red) / (green + red)
    })
}

/// Visible Normalized Difference Vegetation Index, same formula as [`grvi`]
pub fn vndvi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    grvi(green, red)
}

/// Normalized Difference Water Index (McFeeters)
///
/// `NDWI = (GREEN - NIR) / (GREEN + NIR)`
///
/// Water bodies come out positive; vegetation and soil zero or negative.
pub fn ndwi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("green", green.into()), ("nir", nir.into()), |green, nir| {
        (green - nir) / (green + nir)
    })
}

/// Normalized Difference Red Edge Index
///
/// `NDRE = (NIR - REDEDGE) / (NIR + REDEDGE)`
pub fn ndre<'a, D: Dimension>(
    red_edge: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(
        ("red_edge", red_edge.into()),
        ("nir", nir.into()),
        |red_edge, nir| (nir - red_edge) / (nir + red_edge),
    )
}

/// Enhanced Normalized Difference Vegetation Index
///
/// `ENDVI = (NIR + GREEN - 2 * BLUE) / (NIR + GREEN + 2 * BLUE)`
pub fn endvi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("green", green.into()),
        ("nir", nir.into()),
        |blue, green, nir| (nir + green - 2.0 * blue) / (nir + green + 2.0 * blue),
    )
}

/// Green Red Normalized Difference Vegetation Index
///
/// `GRNDVI = (NIR - (GREEN + RED)) / (NIR + (GREEN + RED))`
pub fn grndvi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("green", green.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        |green, red, nir| (nir - (green + red)) / (nir + (green + red)),
    )
}

/// Green Leaf Index, also published as VDVI
///
/// `GLI = (2 * GREEN - RED - BLUE) / (2 * GREEN + RED + BLUE)`
pub fn gli<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("green", green.into()),
        ("red", red.into()),
        |blue, green, red| (2.0 * green - red - blue) / (2.0 * green + red + blue),
    )
}

/// Visible Difference Vegetation Index, same formula as [`gli`]
pub fn vdvi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    gli(blue, green, red)
}
