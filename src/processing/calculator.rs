// src/processing/calculator.rs
use anyhow::Result;
use ndarray::{Array, Dimension};

use crate::processing::bands::{Band, BandSet};
use crate::processing::indices::VegetationIndex;

/// Trait for spectral index calculators
pub trait IndexCalculator: Send + Sync {
    /// Calculate the index from the bands in the set
    fn calculate<D: Dimension>(&self, bands: &BandSet<'_, D>) -> Result<Array<f32, D>>;

    /// Return the bands the calculation reads
    fn required_bands(&self) -> &'static [Band];

    /// Return the name of the index
    fn name(&self) -> &str;
}

/// Calculate an index by name (e.g. `"ndvi"`, `"vndvi"`) with default parameters
pub fn vi<D: Dimension>(name: &str, bands: &BandSet<'_, D>) -> Result<Array<f32, D>> {
    let index: VegetationIndex = name.parse()?;
    index.calculate(bands)
}
