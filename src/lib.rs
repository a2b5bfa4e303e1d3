// src/lib.rs
//! Vegetation index formulas over in-memory band arrays.
//!
//! Every index is a pure elementwise function over same-shaped `f32`
//! arrays of any dimensionality, taking its bands in ascending-wavelength
//! order (blue, green, red, red-edge, NIR, thermal):
//!
//! ```
//! use ndarray::array;
//!
//! let red = array![[0.1f32, 0.2]];
//! let nir = array![[0.5f32, 0.4]];
//! let ndvi = vegi::ndvi(&red, &nir).unwrap();
//! assert!((ndvi[[0, 0]] - 0.6667).abs() < 1e-4);
//! ```
//!
//! Degenerate pixels (zero denominators, negative square roots) come out as
//! NaN or ±Inf. Only mismatched band shapes are reported as errors.
pub mod processing;
pub mod recipe;
pub mod utils;

pub use processing::indices::*;
pub use processing::{pansharpen, vi, Band, BandSet, IndexCalculator, PansharpenMethod};
pub use recipe::{Recipe, RescaleOptions};

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
