//! SAR polarisation indices
//!
//! Ratios of dual-polarisation backscatter (`VV`, `VH`). Values are used
//! as stored; there is no reflectance scaling for radar bands.

use super::formula::{parse_index, IndexFormula, PixelValues, SpectralBand};
use bandix_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Radar polarisation channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarisation {
    VV,
    VH,
}

impl SpectralBand for Polarisation {
    fn name(self) -> &'static str {
        match self {
            Polarisation::VV => "VV",
            Polarisation::VH => "VH",
        }
    }
}

/// Backscatter of one pixel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Backscatter {
    pub vv: f64,
    pub vh: f64,
}

impl PixelValues<Polarisation> for Backscatter {
    fn set(&mut self, band: Polarisation, value: f64) {
        match band {
            Polarisation::VV => self.vv = value,
            Polarisation::VH => self.vh = value,
        }
    }
}

/// Enumeration of supported SAR indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SarIndex {
    /// `VH / VV`
    VHVV,
    /// `VV / VH`
    VVVH,
}

impl SarIndex {
    pub fn long_name(self) -> &'static str {
        match self {
            SarIndex::VHVV => "VH/VV backscatter ratio",
            SarIndex::VVVH => "VV/VH backscatter ratio",
        }
    }
}

impl IndexFormula for SarIndex {
    type Band = Polarisation;
    type Pixel = Backscatter;

    const ALL: &'static [Self] = &[SarIndex::VHVV, SarIndex::VVVH];

    fn name(self) -> &'static str {
        match self {
            SarIndex::VHVV => "VHVV",
            SarIndex::VVVH => "VVVH",
        }
    }

    fn required_bands(self) -> &'static [Polarisation] {
        &[Polarisation::VV, Polarisation::VH]
    }

    fn apply(self, p: &Backscatter) -> f64 {
        match self {
            SarIndex::VHVV => p.vh / p.vv,
            SarIndex::VVVH => p.vv / p.vh,
        }
    }
}

impl fmt::Display for SarIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SarIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_index(s)
    }
}
