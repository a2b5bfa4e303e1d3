// src/processing/indices/difference.rs
use anyhow::Result;
use ndarray::{Array, AsArray, Dimension};

use crate::processing::kernel::{map2, map3};

/// Difference Vegetation Index
///
/// `DVI = NIR - RED`
pub fn dvi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| nir - red)
}

/// Triangular Greenness Index
///
/// `TGI = GREEN - 0.39 * RED - 0.61 * BLUE`
pub fn tgi<'a, D: Dimension>(
    blue: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("blue", blue.into()),
        ("green", green.into()),
        ("red", red.into()),
        |blue, green, red| green - 0.39 * red - 0.61 * blue,
    )
}

/// Transformed Difference Vegetation Index
///
/// `TDVI = 1.5 * (NIR - RED) / sqrt(NIR^2 + RED + 0.5)`
pub fn tdvi<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map2(("red", red.into()), ("nir", nir.into()), |red, nir| {
        1.5 * (nir - red) / (nir * nir + red + 0.5).sqrt()
    })
}

/// Modified Triangular Vegetation Index 2
///
/// ```text
///          1.5 * (2.5 * (NIR - GREEN) - 2.5 * (RED - GREEN))
/// MTVI2 = ---------------------------------------------------
///          sqrt((2 * NIR + 1)^2 - 6 * NIR - 5 * sqrt(RED) - 0.5)
/// ```
///
/// Low NIR makes the radicand negative, which yields NaN.
pub fn mtvi2<'a, D: Dimension>(
    green: impl AsArray<'a, f32, D>,
    red: impl AsArray<'a, f32, D>,
    nir: impl AsArray<'a, f32, D>,
) -> Result<Array<f32, D>> {
    map3(
        ("green", green.into()),
        ("red", red.into()),
        ("nir", nir.into()),
        |green, red, nir| {
            let numerator = 1.5 * (2.5 * (nir - green) - 2.5 * (red - green));
            let two_nir_plus_one = 2.0 * nir + 1.0;
            let radicand =
                two_nir_plus_one * two_nir_plus_one - 6.0 * nir - 5.0 * red.sqrt() - 0.5;
            numerator / radicand.sqrt()
        },
    )
}
