// src/processing/indices/soil.rs
//! Soil-adjusted indices. These carry additive constants, so inputs are
//! expected as reflectance in [0, 1] rather than raw digital numbers.
use anyhow::Result;
use ndarray::{Array, AsArray, Dimension};
use serde::{Deserialize, Serialize};

use crate::processing::kernel::map2;

/// Canopy background adjustment factor for SAVI
pub const DEFAULT_SOIL_FACTOR: f32 = 0.5;

/// Fixed soil factor used by OSAVI and the GOSAVI default
pub const OSAVI_SOIL_FACTOR: f32 = 0.16;

/// Soil line slope and intercept for TSAVI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TsaviParams {
    /// Soil line slope (m)
    #[serde(alias = "m")]
    pub slope: f32,
    /// Soil line intercept (b)
    #[serde(alias = "b")]
    pub intercept: f32,
}

impl TsaviParams {
    pub const DEFAULT: Self = Self {
        slope: 0.5,
        intercept: 0.0,
    };
}

impl Default for TsaviParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Soil Adjusted Vegetation Index
///
/// `SAVI = (1 + L) * (NIR - RED) / (NIR + RED + L)`
///
/// `L = 0` reduces to NDVI; see [`DEFAULT_SOIL_FACTOR`].
pub fn savi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    soil_factor: f32,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), move |red, nir| {
        (1.0 + soil_factor) * (nir - red) / (nir + red + soil_factor)
    })
}

/// Optimized Soil Adjusted Vegetation Index
///
/// `OSAVI = 1.16 * (NIR - RED) / (NIR + RED + 0.16)`
///
/// Stays sensitive where NDVI saturates under dense canopy.
pub fn osavi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    savi(red, nir, OSAVI_SOIL_FACTOR)
}

/// Green Optimized Soil Adjusted Vegetation Index
///
/// `GOSAVI = (NIR - GREEN) / (NIR + GREEN + L)`, with `L = 0.16` by default
pub fn gosavi<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    soil_factor: f32,
) -> Result<Array<f32, D>> {
    map2(("green", green.into()), ("nir", nir.into()), move |green, nir| {
        (nir - green) / (nir + green + soil_factor)
    })
}

/// Modified Soil Adjusted Vegetation Index 2
///
/// `MSAVI2 = ((2 * NIR + 1) - sqrt((2 * NIR + 1)^2 - 8 * (NIR - RED))) / 2`
///
/// A negative discriminant yields NaN.
pub fn msavi2<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| {
        let two_nir_plus_one = 2.0 * nir + 1.0;
        let discriminant = two_nir_plus_one * two_nir_plus_one - 8.0 * (nir - red);
        (two_nir_plus_one - discriminant.sqrt()) / 2.0
    })
}

/// Transformed Soil Adjusted Vegetation Index
///
/// `TSAVI = m * (NIR - m * RED - b) / (RED + m * (NIR - b) + 0.08 * (1 + m^2))`
pub fn tsavi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    params: TsaviParams,
) -> Result<Array<f32, D>> {
    let TsaviParams {
        slope: m,
        intercept: b,
    } = params;
    let adjustment = 0.08 * (1.0 + m * m);

    map2(("red", red.into()), ("nir", nir.into()), move |red, nir| {
        m * (nir - m * red - b) / (red + m * (nir - b) + adjustment)
    })
}
