//! Imagery analysis algorithms
//!
//! Spectral index calculators over named-band datasets:
//! - Optical: vegetation, moisture, burn, water, built-up, soil, mineral
//!   and Tasseled Cap indices from `blue`..`swir2` reflectance
//! - SAR: VV/VH polarisation ratios
//! - Formula engine: shared per-pixel evaluation of any index table

mod calculate;
pub mod formula;
mod optical;
mod sar;

pub use calculate::{
    optical_indices, optical_indices_in_place, sar_indices, sar_indices_in_place,
    CompatibilityWarning, IndexOutput, IndexReport, IndexSelection, OpticalIndices,
    OpticalParams, OutputNames, SarIndices, SarParams, REFLECTANCE_SCALE,
};
pub use formula::{evaluate, IndexFormula, PixelValues, SpectralBand};
pub use optical::{OpticalBand, OpticalIndex, Reflectance};
pub use sar::{Backscatter, Polarisation, SarIndex};
