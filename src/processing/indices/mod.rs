// src/processing/indices/mod.rs
pub mod atmospheric;
pub mod difference;
pub mod normalized;
pub mod ratio;
pub mod soil;

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, ensure, Result};
use log::debug;
use ndarray::{Array, Dimension};
use serde::{Deserialize, Serialize};

use crate::processing::bands::{Band, BandSet};
use crate::processing::calculator::IndexCalculator;
use crate::processing::kernel::is_parallel;

// Re-export indices
pub use atmospheric::{arvi, evi, evi2, gari, vari, Evi2Params, EviParams, DEFAULT_GAMMA};
pub use difference::{dvi, mtvi2, tdvi, tgi};
pub use normalized::{endvi, gli, gndvi, grndvi, grvi, ndre, ndvi, ndwi, vdvi, vndvi};
pub use ratio::{cvi, gci, ipvi, sipi, sr, tvx};
pub use soil::{
    gosavi, msavi2, osavi, savi, tsavi, TsaviParams, DEFAULT_SOIL_FACTOR, OSAVI_SOIL_FACTOR,
};

use Band::{Blue, Green, Nir, Red, RedEdge, Thermal};

fn default_soil_factor() -> f32 {
    DEFAULT_SOIL_FACTOR
}

fn default_gosavi_factor() -> f32 {
    OSAVI_SOIL_FACTOR
}

fn default_gamma() -> f32 {
    DEFAULT_GAMMA
}

/// A vegetation index together with its scalar parameters.
///
/// Deserialises from `{"type": "<acronym>", ...params}`; parameters left out
/// fall back to their documented defaults and unknown
/// fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum VegetationIndex {
    Ndvi,
    Gndvi,
    #[serde(alias = "vndvi")]
    Grvi,
    Savi {
        #[serde(default = "default_soil_factor", alias = "L")]
        l: f32,
    },
    Osavi,
    Gosavi {
        #[serde(default = "default_gosavi_factor", alias = "L")]
        l: f32,
    },
    Msavi2,
    Evi(EviParams),
    Evi2(Evi2Params),
    Endvi,
    Gci,
    #[serde(alias = "vdvi")]
    Gli,
    Vari,
    Arvi,
    Tsavi(TsaviParams),
    Gari {
        #[serde(default = "default_gamma", alias = "y")]
        gamma: f32,
    },
    Tdvi,
    Cvi,
    Mtvi2,
    Sipi,
    Sr,
    Ndwi,
    Ndre,
    Tgi,
    Dvi,
    Ipvi,
    Grndvi,
    Tvx,
}

impl VegetationIndex {
    /// Every index with default parameters
    pub const ALL: [VegetationIndex; 28] = [
        VegetationIndex::Ndvi,
        VegetationIndex::Gndvi,
        VegetationIndex::Grvi,
        VegetationIndex::Savi {
            l: DEFAULT_SOIL_FACTOR,
        },
        VegetationIndex::Osavi,
        VegetationIndex::Gosavi {
            l: OSAVI_SOIL_FACTOR,
        },
        VegetationIndex::Msavi2,
        VegetationIndex::Evi(EviParams::DEFAULT),
        VegetationIndex::Evi2(Evi2Params::DEFAULT),
        VegetationIndex::Endvi,
        VegetationIndex::Gci,
        VegetationIndex::Gli,
        VegetationIndex::Vari,
        VegetationIndex::Arvi,
        VegetationIndex::Tsavi(TsaviParams::DEFAULT),
        VegetationIndex::Gari {
            gamma: DEFAULT_GAMMA,
        },
        VegetationIndex::Tdvi,
        VegetationIndex::Cvi,
        VegetationIndex::Mtvi2,
        VegetationIndex::Sipi,
        VegetationIndex::Sr,
        VegetationIndex::Ndwi,
        VegetationIndex::Ndre,
        VegetationIndex::Tgi,
        VegetationIndex::Dvi,
        VegetationIndex::Ipvi,
        VegetationIndex::Grndvi,
        VegetationIndex::Tvx,
    ];

    /// Uppercase acronym
    pub fn name(&self) -> &'static str {
        match self {
            VegetationIndex::Ndvi => "NDVI",
            VegetationIndex::Gndvi => "GNDVI",
            VegetationIndex::Grvi => "GRVI",
            VegetationIndex::Savi { .. } => "SAVI",
            VegetationIndex::Osavi => "OSAVI",
            VegetationIndex::Gosavi { .. } => "GOSAVI",
            VegetationIndex::Msavi2 => "MSAVI2",
            VegetationIndex::Evi(_) => "EVI",
            VegetationIndex::Evi2(_) => "EVI2",
            VegetationIndex::Endvi => "ENDVI",
            VegetationIndex::Gci => "GCI",
            VegetationIndex::Gli => "GLI",
            VegetationIndex::Vari => "VARI",
            VegetationIndex::Arvi => "ARVI",
            VegetationIndex::Tsavi(_) => "TSAVI",
            VegetationIndex::Gari { .. } => "GARI",
            VegetationIndex::Tdvi => "TDVI",
            VegetationIndex::Cvi => "CVI",
            VegetationIndex::Mtvi2 => "MTVI2",
            VegetationIndex::Sipi => "SIPI",
            VegetationIndex::Sr => "SR",
            VegetationIndex::Ndwi => "NDWI",
            VegetationIndex::Ndre => "NDRE",
            VegetationIndex::Tgi => "TGI",
            VegetationIndex::Dvi => "DVI",
            VegetationIndex::Ipvi => "IPVI",
            VegetationIndex::Grndvi => "GRNDVI",
            VegetationIndex::Tvx => "TVX",
        }
    }

    /// Input bands in the order the index function takes them
    pub fn required_bands(&self) -> &'static [Band] {
        match self {
            VegetationIndex::Ndvi
            | VegetationIndex::Savi { .. }
            | VegetationIndex::Osavi
            | VegetationIndex::Msavi2
            | VegetationIndex::Evi2(_)
            | VegetationIndex::Tsavi(_)
            | VegetationIndex::Tdvi
            | VegetationIndex::Sr
            | VegetationIndex::Dvi
            | VegetationIndex::Ipvi => &[Red, Nir],
            VegetationIndex::Gndvi
            | VegetationIndex::Gosavi { .. }
            | VegetationIndex::Gci
            | VegetationIndex::Ndwi => &[Green, Nir],
            VegetationIndex::Grvi => &[Green, Red],
            VegetationIndex::Ndre => &[RedEdge, Nir],
            VegetationIndex::Evi(_) | VegetationIndex::Arvi | VegetationIndex::Sipi => {
                &[Blue, Red, Nir]
            }
            VegetationIndex::Endvi => &[Blue, Green, Nir],
            VegetationIndex::Gli | VegetationIndex::Vari | VegetationIndex::Tgi => {
                &[Blue, Green, Red]
            }
            VegetationIndex::Cvi | VegetationIndex::Mtvi2 | VegetationIndex::Grndvi => {
                &[Green, Red, Nir]
            }
            VegetationIndex::Gari { .. } => &[Blue, Green, Red, Nir],
            VegetationIndex::Tvx => &[Red, Nir, Thermal],
        }
    }
}

impl fmt::Display for VegetationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VegetationIndex {
    type Err = anyhow::Error;

    /// Parse a lowercase or uppercase acronym into the index with default parameters
    fn from_str(s: &str) -> Result<Self> {
        let index = match s.trim().to_ascii_lowercase().as_str() {
            "ndvi" => VegetationIndex::Ndvi,
            "gndvi" => VegetationIndex::Gndvi,
            "grvi" | "vndvi" => VegetationIndex::Grvi,
            "savi" => VegetationIndex::Savi {
                l: DEFAULT_SOIL_FACTOR,
            },
            "osavi" => VegetationIndex::Osavi,
            "gosavi" => VegetationIndex::Gosavi {
                l: OSAVI_SOIL_FACTOR,
            },
            "msavi2" => VegetationIndex::Msavi2,
            "evi" => VegetationIndex::Evi(EviParams::default()),
            "evi2" => VegetationIndex::Evi2(Evi2Params::default()),
            "endvi" => VegetationIndex::Endvi,
            "gci" => VegetationIndex::Gci,
            "gli" | "vdvi" => VegetationIndex::Gli,
            "vari" => VegetationIndex::Vari,
            "arvi" => VegetationIndex::Arvi,
            "tsavi" => VegetationIndex::Tsavi(TsaviParams::default()),
            "gari" => VegetationIndex::Gari {
                gamma: DEFAULT_GAMMA,
            },
            "tdvi" => VegetationIndex::Tdvi,
            "cvi" => VegetationIndex::Cvi,
            "mtvi2" => VegetationIndex::Mtvi2,
            "sipi" => VegetationIndex::Sipi,
            "sr" => VegetationIndex::Sr,
            "ndwi" => VegetationIndex::Ndwi,
            "ndre" => VegetationIndex::Ndre,
            "tgi" => VegetationIndex::Tgi,
            "dvi" => VegetationIndex::Dvi,
            "ipvi" => VegetationIndex::Ipvi,
            "grndvi" => VegetationIndex::Grndvi,
            "tvx" => VegetationIndex::Tvx,
            _ => bail!("Unknown vegetation index: {}", s),
        };
        Ok(index)
    }
}

impl IndexCalculator for VegetationIndex {
    fn calculate<D: Dimension>(&self, bands: &BandSet<'_, D>) -> Result<Array<f32, D>> {
        let missing: Vec<Band> = self
            .required_bands()
            .iter()
            .copied()
            .filter(|band| !bands.contains(*band))
            .collect();
        ensure!(
            missing.is_empty(),
            "Not enough input bands for {}. Required: {:?}, missing: {:?}",
            self.name(),
            self.required_bands(),
            missing
        );

        let first = bands.get(self.required_bands()[0])?;
        debug!(
            "Calculating {} over shape {:?} ({})",
            self.name(),
            first.shape(),
            if is_parallel(first.len()) { "parallel" } else { "sequential" }
        );

        match *self {
            VegetationIndex::Ndvi => ndvi(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Gndvi => gndvi(bands.get(Green)?, bands.get(Nir)?),
            VegetationIndex::Grvi => grvi(bands.get(Green)?, bands.get(Red)?),
            VegetationIndex::Savi { l } => savi(bands.get(Red)?, bands.get(Nir)?, l),
            VegetationIndex::Osavi => osavi(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Gosavi { l } => gosavi(bands.get(Green)?, bands.get(Nir)?, l),
            VegetationIndex::Msavi2 => msavi2(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Evi(params) => evi(
                bands.get(Blue)?,
                bands.get(Red)?,
                bands.get(Nir)?,
                params,
            ),
            VegetationIndex::Evi2(params) => evi2(bands.get(Red)?, bands.get(Nir)?, params),
            VegetationIndex::Endvi => endvi(bands.get(Blue)?, bands.get(Green)?, bands.get(Nir)?),
            VegetationIndex::Gci => gci(bands.get(Green)?, bands.get(Nir)?),
            VegetationIndex::Gli => gli(bands.get(Blue)?, bands.get(Green)?, bands.get(Red)?),
            VegetationIndex::Vari => vari(bands.get(Blue)?, bands.get(Green)?, bands.get(Red)?),
            VegetationIndex::Arvi => arvi(bands.get(Blue)?, bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Tsavi(params) => tsavi(bands.get(Red)?, bands.get(Nir)?, params),
            VegetationIndex::Gari { gamma } => gari(
                bands.get(Blue)?,
                bands.get(Green)?,
                bands.get(Red)?,
                bands.get(Nir)?,
                gamma,
            ),
            VegetationIndex::Tdvi => tdvi(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Cvi => cvi(bands.get(Green)?, bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Mtvi2 => mtvi2(bands.get(Green)?, bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Sipi => sipi(bands.get(Blue)?, bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Sr => sr(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Ndwi => ndwi(bands.get(Green)?, bands.get(Nir)?),
            VegetationIndex::Ndre => ndre(bands.get(RedEdge)?, bands.get(Nir)?),
            VegetationIndex::Tgi => tgi(bands.get(Blue)?, bands.get(Green)?, bands.get(Red)?),
            VegetationIndex::Dvi => dvi(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Ipvi => ipvi(bands.get(Red)?, bands.get(Nir)?),
            VegetationIndex::Grndvi => {
                grndvi(bands.get(Green)?, bands.get(Red)?, bands.get(Nir)?)
            }
            VegetationIndex::Tvx => tvx(bands.get(Red)?, bands.get(Nir)?, bands.get(Thermal)?),
        }
    }

    fn required_bands(&self) -> &'static [Band] {
        VegetationIndex::required_bands(self)
    }

    fn name(&self) -> &str {
        VegetationIndex::name(self)
    }
}
