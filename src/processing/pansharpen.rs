// src/processing/pansharpen.rs
use std::str::FromStr;

use anyhow::{bail, Result};
use ndarray::{Array, AsArray, Dimension};
use serde::{Deserialize, Serialize};

use crate::processing::kernel::{map2, map4, Named};

/// Default band weight for the Brovey transform
pub const DEFAULT_BROVEY_WEIGHT: f32 = 0.1;

fn default_weight() -> f32 {
    DEFAULT_BROVEY_WEIGHT
}

/// Red, green and blue channels after sharpening
pub type Rgb<D> = (Array<f32, D>, Array<f32, D>, Array<f32, D>);

/// Pansharpening method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case", deny_unknown_fields)]
pub enum PansharpenMethod {
    /// Weighted Brovey transform: `c * pan / (w*r + w*g + w*b)`
    #[serde(alias = "browley")]
    Brovey {
        #[serde(default = "default_weight", alias = "W")]
        weight: f32,
    },
    /// Unweighted Brovey transform: `c * pan / (r + g + b)`
    #[serde(alias = "simple_browley")]
    SimpleBrovey,
    /// `0.5 * (c + pan)`
    SampleMean,
    /// `c + (pan - mean(r, g, b))`
    Esri,
}

impl Default for PansharpenMethod {
    fn default() -> Self {
        PansharpenMethod::Brovey {
            weight: DEFAULT_BROVEY_WEIGHT,
        }
    }
}

impl FromStr for PansharpenMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "brovey" | "browley" => PansharpenMethod::default(),
            "simple_brovey" | "simple_browley" => PansharpenMethod::SimpleBrovey,
            "sample_mean" => PansharpenMethod::SampleMean,
            "esri" => PansharpenMethod::Esri,
            _ => bail!("Unknown pansharpening method: {}", s),
        })
    }
}

/// Sharpen the red, green and blue bands with a higher-resolution panchromatic band.
///
/// All four arrays must already be resampled to the same shape.
pub fn pansharpen<'a, D: Dimension>(
    red: impl AsArray<'a, f32, D>,
    green: impl AsArray<'a, f32, D>,
    blue: impl AsArray<'a, f32, D>,
    pan: impl AsArray<'a, f32, D>,
    method: PansharpenMethod,
) -> Result<Rgb<D>> {
    let red: Named<'_, D> = ("red", red.into());
    let green: Named<'_, D> = ("green", green.into());
    let blue: Named<'_, D> = ("blue", blue.into());
    let pan: Named<'_, D> = ("pan", pan.into());

    match method {
        PansharpenMethod::Brovey { weight } => {
            let ratio = map4(
                red.clone(),
                green.clone(),
                blue.clone(),
                pan,
                move |r, g, b, p| p / (weight * r + weight * g + weight * b),
            )?;
            per_channel(red, green, blue, ("ratio", ratio.view()), |c, k| c * k)
        }
        PansharpenMethod::SimpleBrovey => {
            let ratio = map4(
                red.clone(),
                green.clone(),
                blue.clone(),
                pan,
                |r, g, b, p| p / (r + g + b),
            )?;
            per_channel(red, green, blue, ("ratio", ratio.view()), |c, k| c * k)
        }
        PansharpenMethod::SampleMean => {
            // Shapes are checked per channel against pan
            per_channel(red, green, blue, pan, |c, p| 0.5 * (c + p))
        }
        PansharpenMethod::Esri => {
            let adjustment = map4(
                red.clone(),
                green.clone(),
                blue.clone(),
                pan,
                |r, g, b, p| p - (r + g + b) / 3.0,
            )?;
            per_channel(red, green, blue, ("adjustment", adjustment.view()), |c, a| c + a)
        }
    }
}

/// Combine each colour channel with `other`, channels in parallel
fn per_channel<D, F>(
    red: Named<'_, D>,
    green: Named<'_, D>,
    blue: Named<'_, D>,
    other: Named<'_, D>,
    f: F,
) -> Result<Rgb<D>>
where
    D: Dimension,
    F: Fn(f32, f32) -> f32 + Sync + Send,
{
    let f = &f;
    let (red, (green, blue)) = rayon::join(
        || map2(red, other.clone(), f),
        || {
            rayon::join(
                || map2(green, other.clone(), f),
                || map2(blue, other.clone(), f),
            )
        },
    );
    Ok((red?, green?, blue?))
}
