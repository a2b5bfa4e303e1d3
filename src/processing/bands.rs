// src/processing/bands.rs
use std::collections::{btree_map, BTreeMap};
use std::iter::Copied;
use std::fmt;

use anyhow::{anyhow, Result};
use ndarray::{ArrayView, AsArray, Dimension};
use serde::{Deserialize, Serialize};

/// Spectral band, ordered by ascending wavelength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// 400-480 nm
    Blue,
    /// 495-570 nm
    Green,
    /// 625-740 nm
    Red,
    /// ~715 nm
    RedEdge,
    /// 800-900 nm
    Nir,
    /// Land surface temperature
    Thermal,
}

impl Band {
    pub const ALL: [Band; 6] = [
        Band::Blue,
        Band::Green,
        Band::Red,
        Band::RedEdge,
        Band::Nir,
        Band::Thermal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Red => "red",
            Band::RedEdge => "red_edge",
            Band::Nir => "nir",
            Band::Thermal => "thermal",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed band arrays keyed by [`Band`], used to dispatch an index by value or name.
///
/// The set never copies pixel data; it holds views into caller-owned arrays.
#[derive(Debug, Clone)]
pub struct BandSet<'a, D: Dimension> {
    bands: BTreeMap<Band, ArrayView<'a, f32, D>>,
}

impl<'a, D: Dimension> BandSet<'a, D> {
    pub fn new() -> Self {
        Self {
            bands: BTreeMap::new(),
        }
    }

    /// Builder form of [`BandSet::insert`]
    pub fn with(mut self, band: Band, data: impl AsArray<'a, f32, D>) -> Self {
        self.insert(band, data);
        self
    }

    /// Add or replace a band, returning the previous view if any
    pub fn insert(
        &mut self,
        band: Band,
        data: impl AsArray<'a, f32, D>,
    ) -> Option<ArrayView<'a, f32, D>> {
        self.bands.insert(band, data.into())
    }

    pub fn get(&self, band: Band) -> Result<ArrayView<'a, f32, D>> {
        self.bands
            .get(&band)
            .cloned()
            .ok_or_else(|| anyhow!("Missing required band: {}", band))
    }

    pub fn contains(&self, band: Band) -> bool {
        self.bands.contains_key(&band)
    }

    /// Bands present in the set, in ascending wavelength order
    pub fn bands(&self) -> Copied<btree_map::Keys<'_, Band, ArrayView<'a, f32, D>>> {
        self.bands.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Shape of the shortest-wavelength band present
    pub fn shape(&self) -> Option<&[usize]> {
        self.bands.values().next().map(|view| view.shape())
    }
}

impl<'a, D: Dimension> Default for BandSet<'a, D> {
    fn default() -> Self {
        Self::new()
    }
}
