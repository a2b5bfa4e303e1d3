// src/processing/indices/atmospheric.rs
//! Indices that use the blue band (or fixed coefficients) to resist aerosol
//! scattering.
use anyhow::Result;
use ndarray::{Array, AsArray, Dimension};
use serde::{Deserialize, Serialize};

use crate::processing::kernel::{map2, map3, map4};

/// Default GARI weighting of the blue/red difference
pub const DEFAULT_GAMMA: f32 = 1.7;

/// EVI coefficients (MODIS)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EviParams {
    /// Gain factor
    pub g: f32,
    /// Aerosol resistance (red)
    pub c1: f32,
    /// Aerosol resistance (blue)
    pub c2: f32,
    /// Canopy background adjustment
    pub l: f32,
}

impl EviParams {
    pub const DEFAULT: Self = Self {
        g: 2.5,
        c1: 6.0,
        c2: 7.5,
        l: 1.0,
    };
}

impl Default for EviParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Two-band EVI coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Evi2Params {
    pub g: f32,
    pub c1: f32,
    pub l: f32,
}

impl Evi2Params {
    pub const DEFAULT: Self = Self {
        g: 2.5,
        c1: 2.4,
        l: 1.0,
    };
}

impl Default for Evi2Params {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Enhanced Vegetation Index
///
/// `EVI = G * (NIR - RED) / (NIR + C1 * RED - C2 * BLUE + L)`
pub fn evi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    params: EviParams,
) -> Result<Array<f32, D>> {
    let EviParams { g, c1, c2, l } = params;

    map3(
        ("blue", blue.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        move |blue, red, nir| g * (nir - red) / (nir + c1 * red - c2 * blue + l),
    )
}

/// Enhanced Vegetation Index 2, the blue-free variant of [`evi`]
///
/// `EVI2 = G * (NIR - RED) / (NIR + C1 * RED + L)`
pub fn evi2<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    params: Evi2Params,
) -> Result<Array<f32, D>> {
    let Evi2Params { g, c1, l } = params;

    map2(("red", red.into()), ("nir", nir.into()), move |red, nir| {
        g * (nir - red) / (nir + c1 * red + l)
    })
}

/// Atmospherically Resistant Vegetation Index
///
/// `ARVI = (NIR - 2 * RED + BLUE) / (NIR + 2 * RED + BLUE)`
pub fn arvi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        |blue, red, nir| (nir - 2.0 * red + blue) / (nir + 2.0 * red + blue),
    )
}

/// Visible Atmospherically Resistant Index
///
/// `VARI = (GREEN - RED) / (GREEN + RED - BLUE)`
pub fn vari<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("green", green.into()),
        ("red", red.into()),
        |blue, green, red| (green - red) / (green + red - blue),
    )
}

/// Green Atmospherically Resistant Index
///
/// `GARI = (NIR - (GREEN - γ * (BLUE - RED))) / (NIR + (GREEN - γ * (BLUE - RED)))`
pub fn gari<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
    gamma: f32,
) -> Result<Array<f32, D>> {
    map4(
        ("blue", blue.into()),
        ("green", green.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        move |blue, green, red, nir| {
            let corrected_green = green - gamma * (blue - red);
            (nir - corrected_green) / (nir + corrected_green)
        },
    )
}
