// src/utils/fixed_point.rs
use ndarray::{Array, AsArray, Dimension};

/// Default integer nodata marker for quantised index rasters
pub const NODATA_VALUE_INT: i16 = -10000;

/// Default scale: an index of 0.5 is stored as 5000
pub const DEFAULT_SCALE_FACTOR: i32 = 10000;

/// Quantise an index result to `i16`.
///
/// NaN and infinite pixels become `nodata_value`; everything else is clamped
/// to ±0.9999 so the scaled value never collides with the nodata marker.
pub fn to_fixed_point<'a, D: Dimension>(
    index: impl AsArray<'a, f32, D>,
    scale_factor: i32,
    nodata_value: i16,
) -> Array<i16, D> {
    let scale = scale_factor as f32;
    index.into().mapv(|value| {
        if value.is_finite() {
            // Clamp to avoid overflow and scale
            (value.clamp(-0.9999, 0.9999) * scale).round() as i16
        } else {
            nodata_value
        }
    })
}

/// Inverse of [`to_fixed_point`]; nodata pixels come back as NaN
pub fn from_fixed_point<'a, D: Dimension>(
    fixed: impl AsArray<'a, i16, D>,
    scale_factor: i32,
    nodata_value: i16,
) -> Array<f32, D> {
    let scale = scale_factor as f32;
    fixed.into().mapv(|value| {
        if value == nodata_value {
            f32::NAN
        } else {
            value as f32 / scale
        }
    })
}
