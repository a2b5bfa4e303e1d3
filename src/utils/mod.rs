// src/utils/mod.rs
pub mod bit_depth;
pub mod fixed_point;
pub mod rescale;

pub use bit_depth::{convert_16bit_to_8bit, convert_8bit_to_16bit};
pub use fixed_point::{from_fixed_point, to_fixed_point};
pub use rescale::{crop_to_bounds, rescale, validate};
