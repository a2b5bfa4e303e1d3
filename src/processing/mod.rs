// src/processing/mod.rs
pub mod bands;
pub mod calculator;
pub mod indices;
pub mod kernel;
pub mod pansharpen;

// Re-export main components
pub use bands::{Band, BandSet};
pub use calculator::{vi, IndexCalculator};
pub use indices::VegetationIndex;
pub use pansharpen::{pansharpen, PansharpenMethod};
