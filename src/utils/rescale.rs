// src/utils/rescale.rs
//! Post-processing of index results. Every function consumes its input and
//! returns the transformed array.
use anyhow::{ensure, Result};
use ndarray::{Array, Dimension};

/// Replace NaN and infinite pixels with `value` (0 is the usual choice)
pub fn validate<D: Dimension>(mut array: Array<f32, D>, value: f32) -> Array<f32, D> {
    array.mapv_inplace(|v| if v.is_finite() { v } else { value });
    array
}

/// Map `[low, high]` onto `[0, 1]` and optionally crop to `bounds`.
///
/// Non-finite pixels are zeroed before and after the linear stretch. The
/// stretch is skipped when `bounds` equals `(low, high)`, since it would not
/// change the cropped result.
pub fn rescale<D: Dimension>(
    array: Array<f32, D>,
    low: f32,
    high: f32,
    bounds: Option<(f32, f32)>,
) -> Result<Array<f32, D>> {
    let mut array = validate(array, 0.0);

    if bounds != Some((low, high)) {
        ensure!(
            high != low,
            "Invalid rescale range: low and high are both {}",
            low
        );
        let span = high - low;
        array.mapv_inplace(|v| (v - low) / span);
        array = validate(array, 0.0);
    }

    if let Some((bmin, bmax)) = bounds {
        array = crop_to_bounds(array, bmin, bmax);
    }

    Ok(array)
}

/// Clamp values below `low` and above `high`. NaN passes through untouched.
pub fn crop_to_bounds<D: Dimension>(mut array: Array<f32, D>, low: f32, high: f32) -> Array<f32, D> {
    array.mapv_inplace(|v| {
        if v < low {
            low
        } else if v > high {
            high
        } else {
            v
        }
    });
    array
}
