//! Optical multispectral indices
//!
//! Formulas over the six surface reflectance bands `blue`, `green`, `red`,
//! `nir`, `swir1` and `swir2`. Coefficient-based formulas expect
//! reflectance in the 0.0-1.0 range.

use super::formula::{parse_index, IndexFormula, PixelValues, SpectralBand};
use bandix_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Optical reflectance bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpticalBand {
    Blue,
    Green,
    Red,
    Nir,
    Swir1,
    Swir2,
}

impl SpectralBand for OpticalBand {
    fn name(self) -> &'static str {
        match self {
            OpticalBand::Blue => "blue",
            OpticalBand::Green => "green",
            OpticalBand::Red => "red",
            OpticalBand::Nir => "nir",
            OpticalBand::Swir1 => "swir1",
            OpticalBand::Swir2 => "swir2",
        }
    }
}

/// Reflectance of one pixel. Bands a formula does not read stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reflectance {
    pub blue: f64,
    pub green: f64,
    pub red: f64,
    pub nir: f64,
    pub swir1: f64,
    pub swir2: f64,
}

impl PixelValues<OpticalBand> for Reflectance {
    fn set(&mut self, band: OpticalBand, value: f64) {
        match band {
            OpticalBand::Blue => self.blue = value,
            OpticalBand::Green => self.green = value,
            OpticalBand::Red => self.red = value,
            OpticalBand::Nir => self.nir = value,
            OpticalBand::Swir1 => self.swir1 = value,
            OpticalBand::Swir2 => self.swir2 = value,
        }
    }
}

/// Enumeration of supported optical indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpticalIndex {
    /// Normalised Difference Vegetation Index
    NDVI,
    /// Non-linear (kernel) NDVI, published as `kNDVI`
    KNDVI,
    /// Enhanced Vegetation Index
    EVI,
    /// Leaf Area Index (from EVI)
    LAI,
    /// Soil Adjusted Vegetation Index
    SAVI,
    /// Modified Soil Adjusted Vegetation Index
    MSAVI,
    /// Normalised Difference Moisture Index
    NDMI,
    /// Normalised Burn Ratio
    NBR,
    /// Burn Area Index
    BAI,
    /// Normalised Difference Snow Index
    NDSI,
    /// Normalised Difference Tillage Index
    NDTI,
    /// Normalised Difference Water Index (McFeeters)
    NDWI,
    /// Modified Normalised Difference Water Index (Xu)
    MNDWI,
    /// Normalised Difference Built-Up Index
    NDBI,
    /// Built-Up Index
    BUI,
    /// Built-up Area Extraction Index
    BAEI,
    /// New Built-up Index
    NBI,
    /// Bare Soil Index
    BSI,
    /// Automated Water Extraction Index, no shadows (`AWEI_ns`)
    AWEINS,
    /// Automated Water Extraction Index, shadows (`AWEI_sh`)
    AWEISH,
    /// Water Index
    WI,
    /// Tasseled Cap Wetness
    TCW,
    /// Tasseled Cap Greenness
    TCG,
    /// Tasseled Cap Brightness
    TCB,
    /// Clay Minerals Ratio
    CMR,
    /// Ferrous Minerals Ratio
    FMR,
    /// Iron Oxide Ratio
    IOR,
}

use OpticalBand::{Blue, Green, Nir, Red, Swir1, Swir2};

const ALL_BANDS: &[OpticalBand] = &[Blue, Green, Red, Nir, Swir1, Swir2];

impl OpticalIndex {
    /// Full name with the publication that introduced the index
    pub fn long_name(self) -> &'static str {
        match self {
            OpticalIndex::NDVI => "Normalised Difference Vegetation Index (Rouse 1973)",
            OpticalIndex::KNDVI => {
                "Non-linear Normalised Difference Vegetation Index (Camps-Valls et al. 2021)"
            }
            OpticalIndex::EVI => "Enhanced Vegetation Index (Huete 2002)",
            OpticalIndex::LAI => "Leaf Area Index (Boegh 2002)",
            OpticalIndex::SAVI => "Soil Adjusted Vegetation Index (Huete 1988)",
            OpticalIndex::MSAVI => "Modified Soil Adjusted Vegetation Index (Qi et al. 1994)",
            OpticalIndex::NDMI => "Normalised Difference Moisture Index (Gao 1996)",
            OpticalIndex::NBR => "Normalised Burn Ratio (Lopez Garcia 1991)",
            OpticalIndex::BAI => "Burn Area Index (Martin 1998)",
            OpticalIndex::NDSI => "Normalised Difference Snow Index (Hall 1995)",
            OpticalIndex::NDTI => "Normalised Difference Tillage Index (Van Deventer et al. 1997)",
            OpticalIndex::NDWI => "Normalised Difference Water Index (McFeeters 1996)",
            OpticalIndex::MNDWI => "Modified Normalised Difference Water Index (Xu 2006)",
            OpticalIndex::NDBI => "Normalised Difference Built-Up Index (Zha 2003)",
            OpticalIndex::BUI => "Built-Up Index (He et al. 2010)",
            OpticalIndex::BAEI => "Built-Up Area Extraction Index (Bouzekri et al. 2015)",
            OpticalIndex::NBI => "New Built-Up Index (Jieli et al. 2010)",
            OpticalIndex::BSI => "Bare Soil Index (Rikimaru et al. 2002)",
            OpticalIndex::AWEINS => "Automated Water Extraction Index, no shadows (Feyisa 2014)",
            OpticalIndex::AWEISH => "Automated Water Extraction Index, shadows (Feyisa 2014)",
            OpticalIndex::WI => "Water Index (Fisher 2016)",
            OpticalIndex::TCW => "Tasseled Cap Wetness (Crist 1985)",
            OpticalIndex::TCG => "Tasseled Cap Greenness (Crist 1985)",
            OpticalIndex::TCB => "Tasseled Cap Brightness (Crist 1985)",
            OpticalIndex::CMR => "Clay Minerals Ratio (Drury 1987)",
            OpticalIndex::FMR => "Ferrous Minerals Ratio (Segal 1982)",
            OpticalIndex::IOR => "Iron Oxide Ratio (Segal 1982)",
        }
    }
}

impl IndexFormula for OpticalIndex {
    type Band = OpticalBand;
    type Pixel = Reflectance;

    const ALL: &'static [Self] = &[
        OpticalIndex::NDVI,
        OpticalIndex::KNDVI,
        OpticalIndex::EVI,
        OpticalIndex::LAI,
        OpticalIndex::SAVI,
        OpticalIndex::MSAVI,
        OpticalIndex::NDMI,
        OpticalIndex::NBR,
        OpticalIndex::BAI,
        OpticalIndex::NDSI,
        OpticalIndex::NDTI,
        OpticalIndex::NDWI,
        OpticalIndex::MNDWI,
        OpticalIndex::NDBI,
        OpticalIndex::BUI,
        OpticalIndex::BAEI,
        OpticalIndex::NBI,
        OpticalIndex::BSI,
        OpticalIndex::AWEINS,
        OpticalIndex::AWEISH,
        OpticalIndex::WI,
        OpticalIndex::TCW,
        OpticalIndex::TCG,
        OpticalIndex::TCB,
        OpticalIndex::CMR,
        OpticalIndex::FMR,
        OpticalIndex::IOR,
    ];

    fn name(self) -> &'static str {
        match self {
            OpticalIndex::NDVI => "NDVI",
            OpticalIndex::KNDVI => "kNDVI",
            OpticalIndex::EVI => "EVI",
            OpticalIndex::LAI => "LAI",
            OpticalIndex::SAVI => "SAVI",
            OpticalIndex::MSAVI => "MSAVI",
            OpticalIndex::NDMI => "NDMI",
            OpticalIndex::NBR => "NBR",
            OpticalIndex::BAI => "BAI",
            OpticalIndex::NDSI => "NDSI",
            OpticalIndex::NDTI => "NDTI",
            OpticalIndex::NDWI => "NDWI",
            OpticalIndex::MNDWI => "MNDWI",
            OpticalIndex::NDBI => "NDBI",
            OpticalIndex::BUI => "BUI",
            OpticalIndex::BAEI => "BAEI",
            OpticalIndex::NBI => "NBI",
            OpticalIndex::BSI => "BSI",
            OpticalIndex::AWEINS => "AWEI_ns",
            OpticalIndex::AWEISH => "AWEI_sh",
            OpticalIndex::WI => "WI",
            OpticalIndex::TCW => "TCW",
            OpticalIndex::TCG => "TCG",
            OpticalIndex::TCB => "TCB",
            OpticalIndex::CMR => "CMR",
            OpticalIndex::FMR => "FMR",
            OpticalIndex::IOR => "IOR",
        }
    }

    fn required_bands(self) -> &'static [OpticalBand] {
        match self {
            OpticalIndex::NDVI
            | OpticalIndex::KNDVI
            | OpticalIndex::SAVI
            | OpticalIndex::MSAVI
            | OpticalIndex::BAI => &[Nir, Red],
            OpticalIndex::EVI | OpticalIndex::LAI => &[Nir, Red, Blue],
            OpticalIndex::NDMI | OpticalIndex::NDBI | OpticalIndex::FMR => &[Nir, Swir1],
            OpticalIndex::NBR => &[Nir, Swir2],
            OpticalIndex::NDSI | OpticalIndex::MNDWI => &[Green, Swir1],
            OpticalIndex::NDTI | OpticalIndex::CMR => &[Swir1, Swir2],
            OpticalIndex::NDWI => &[Green, Nir],
            OpticalIndex::BUI | OpticalIndex::NBI => &[Swir1, Nir, Red],
            OpticalIndex::BAEI => &[Red, Green, Swir1],
            OpticalIndex::BSI => &[Swir1, Red, Nir, Blue],
            OpticalIndex::AWEINS => &[Green, Swir1, Nir, Swir2],
            OpticalIndex::AWEISH => &[Blue, Green, Nir, Swir1, Swir2],
            OpticalIndex::WI => &[Green, Red, Nir, Swir1, Swir2],
            OpticalIndex::TCW | OpticalIndex::TCG | OpticalIndex::TCB => ALL_BANDS,
            OpticalIndex::IOR => &[Red, Blue],
        }
    }

    fn apply(self, p: &Reflectance) -> f64 {
        match self {
            OpticalIndex::NDVI => normalized_difference(p.nir, p.red),
            OpticalIndex::KNDVI => normalized_difference(p.nir, p.red).powi(2).tanh(),
            OpticalIndex::EVI => evi(p),
            OpticalIndex::LAI => 3.618 * evi(p) - 0.118,
            OpticalIndex::SAVI => 1.5 * (p.nir - p.red) / (p.nir + p.red + 0.5),
            OpticalIndex::MSAVI => {
                let a = 2.0 * p.nir + 1.0;
                (a - (a * a - 8.0 * (p.nir - p.red)).sqrt()) / 2.0
            }
            OpticalIndex::NDMI => normalized_difference(p.nir, p.swir1),
            OpticalIndex::NBR => normalized_difference(p.nir, p.swir2),
            OpticalIndex::BAI => 1.0 / ((0.10 - p.red).powi(2) + (0.06 - p.nir).powi(2)),
            OpticalIndex::NDSI | OpticalIndex::MNDWI => normalized_difference(p.green, p.swir1),
            OpticalIndex::NDTI => normalized_difference(p.swir1, p.swir2),
            OpticalIndex::NDWI => normalized_difference(p.green, p.nir),
            OpticalIndex::NDBI => normalized_difference(p.swir1, p.nir),
            OpticalIndex::BUI => {
                normalized_difference(p.swir1, p.nir) - normalized_difference(p.nir, p.red)
            }
            OpticalIndex::BAEI => (p.red + 0.3) / (p.green + p.swir1),
            OpticalIndex::NBI => (p.swir1 + p.red) / p.nir,
            OpticalIndex::BSI => {
                let bare = p.swir1 + p.red;
                let veg = p.nir + p.blue;
                (bare - veg) / (bare + veg)
            }
            // Feyisa et al. 2014, eq. 1
            OpticalIndex::AWEINS => {
                4.0 * (p.green - p.swir1) - (0.25 * p.nir + 2.75 * p.swir2)
            }
            OpticalIndex::AWEISH => {
                p.blue + 2.5 * p.green - 1.5 * (p.nir + p.swir1) - 0.25 * p.swir2
            }
            OpticalIndex::WI => {
                1.7204 + 171.0 * p.green + 3.0 * p.red
                    - 70.0 * p.nir
                    - 45.0 * p.swir1
                    - 71.0 * p.swir2
            }
            OpticalIndex::TCW => {
                0.0315 * p.blue + 0.2021 * p.green + 0.3102 * p.red + 0.1594 * p.nir
                    - 0.6806 * p.swir1
                    - 0.6109 * p.swir2
            }
            OpticalIndex::TCG => {
                -0.1603 * p.blue - 0.2819 * p.green - 0.4934 * p.red + 0.7940 * p.nir
                    - 0.0002 * p.swir1
                    - 0.1446 * p.swir2
            }
            OpticalIndex::TCB => {
                0.2043 * p.blue + 0.4158 * p.green + 0.5524 * p.red + 0.5741 * p.nir
                    + 0.3124 * p.swir1
                    - 0.2303 * p.swir2
            }
            OpticalIndex::CMR => p.swir1 / p.swir2,
            OpticalIndex::FMR => p.swir1 / p.nir,
            OpticalIndex::IOR => p.red / p.blue,
        }
    }

    fn is_coefficient_based(self) -> bool {
        matches!(
            self,
            OpticalIndex::WI
                | OpticalIndex::BAEI
                | OpticalIndex::AWEINS
                | OpticalIndex::AWEISH
                | OpticalIndex::TCW
                | OpticalIndex::TCG
                | OpticalIndex::TCB
                | OpticalIndex::EVI
                | OpticalIndex::LAI
                | OpticalIndex::SAVI
                | OpticalIndex::MSAVI
        )
    }
}

impl fmt::Display for OpticalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpticalIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_index(s)
    }
}

fn normalized_difference(a: f64, b: f64) -> f64 {
    (a - b) / (a + b)
}

fn evi(p: &Reflectance) -> f64 {
    2.5 * (p.nir - p.red) / (p.nir + 6.0 * p.red - 7.5 * p.blue + 1.0)
}
