// src/recipe.rs
use anyhow::{Context, Result};
use log::debug;
use ndarray::{Array, Dimension};
use serde::{Deserialize, Serialize};

use crate::processing::bands::{Band, BandSet};
use crate::processing::calculator::IndexCalculator;
use crate::processing::indices::VegetationIndex;
use crate::utils::rescale::{rescale, validate};

/// Linear stretch applied to an index result
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RescaleOptions {
    #[serde(default)]
    pub low: f32,
    #[serde(default = "default_high")]
    pub high: f32,
    /// Crop limits applied after the stretch
    #[serde(default)]
    pub bounds: Option<(f32, f32)>,
}

fn default_high() -> f32 {
    1.0
}

impl Default for RescaleOptions {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: default_high(),
            bounds: None,
        }
    }
}

/// One index computation described as data.
///
/// ```json
/// {
///   "name": "canopy",
///   "index": { "type": "savi", "l": 0.25 },
///   "rescale": { "low": -1.0, "high": 1.0, "bounds": [0.0, 1.0] },
///   "fill": 0.0
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Overrides the index acronym as the output name
    #[serde(default)]
    pub name: Option<String>,
    pub index: VegetationIndex,
    #[serde(default)]
    pub rescale: Option<RescaleOptions>,
    /// Replacement for NaN/Inf pixels in the final result
    #[serde(default)]
    pub fill: Option<f32>,
}

impl Recipe {
    pub fn new(index: VegetationIndex) -> Self {
        Self {
            name: None,
            index,
            rescale: None,
            fill: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rescale(mut self, rescale: RescaleOptions) -> Self {
        self.rescale = Some(rescale);
        self
    }

    pub fn with_fill(mut self, fill: f32) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse index recipe")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize index recipe")
    }
}

impl IndexCalculator for Recipe {
    fn calculate<D: Dimension>(&self, bands: &BandSet<'_, D>) -> Result<Array<f32, D>> {
        let mut result = self
            .index
            .calculate(bands)
            .with_context(|| format!("Failed to calculate {}", self.name()))?;

        if let Some(RescaleOptions { low, high, bounds }) = self.rescale {
            result = rescale(result, low, high, bounds)?;
        }

        if let Some(fill) = self.fill {
            let invalid = result.iter().filter(|v| !v.is_finite()).count();
            if invalid > 0 {
                debug!(
                    "{}: filling {} non-finite pixels with {}",
                    self.name(),
                    invalid,
                    fill
                );
            }
            result = validate(result, fill);
        }

        Ok(result)
    }

    fn required_bands(&self) -> &'static [Band] {
        self.index.required_bands()
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.index.name())
    }
}
