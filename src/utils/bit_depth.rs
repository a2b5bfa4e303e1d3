// src/utils/bit_depth.rs
use ndarray::{Array, AsArray, Dimension};

pub const UINT8: f32 = 255.0;
pub const UINT16: f32 = 65535.0;

// 65535 / 255
const WIDEN: u16 = 257;

/// Stretch 8-bit samples to the 16-bit range.
///
/// Values are clipped to [0, 255] and truncated before scaling, so 255
/// maps to 65535 and 1 maps to 257.
pub fn convert_8bit_to_16bit<'a, D: Dimension>(array: impl AsArray<'a, f32, D>) -> Array<u16, D> {
    array
        .into()
        .mapv(|value| u16::from(value.clamp(0.0, UINT8) as u8) * WIDEN)
}

/// Compress 16-bit samples to the 8-bit range, truncating.
pub fn convert_16bit_to_8bit<'a, D: Dimension>(array: impl AsArray<'a, f32, D>) -> Array<u8, D> {
    array
        .into()
        .mapv(|value| ((value.clamp(0.0, UINT16) as u16) / WIDEN) as u8)
}
