//! # bandix Algorithms
//!
//! Remote sensing index calculators for bandix datasets.
//!
//! ## Available Algorithm Categories
//!
//! - **imagery**: optical spectral indices (NDVI, EVI, NBR, Tasseled Cap, ...)
//!   and SAR polarisation ratios

pub mod imagery;
mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        optical_indices, optical_indices_in_place, sar_indices, sar_indices_in_place,
        CompatibilityWarning, IndexOutput, IndexReport, IndexSelection, OpticalIndex,
        OpticalIndices, OpticalParams, OutputNames, SarIndex, SarIndices, SarParams,
    };
    pub use bandix_core::prelude::*;
}
