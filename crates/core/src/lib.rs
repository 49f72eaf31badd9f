//! # bandix Core
//!
//! Core types and traits for the bandix remote sensing library.
//!
//! This crate provides:
//! - `Dataset`: named N-dimensional bands of one scene or time stack
//! - `BoundingBox`: extents of GeoJSON areas of interest
//! - `Error`: the shared error taxonomy
//! - Algorithm trait for a consistent API

pub mod dataset;
pub mod error;
pub mod vector;

pub use dataset::{Band, Dataset};
pub use error::{Error, Result};
pub use vector::{geojson_bounds, read_geojson_bounds, BoundingBox};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::dataset::{Band, Dataset};
    pub use crate::error::{Error, Result};
    pub use crate::vector::{read_geojson_bounds, BoundingBox};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in bandix.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
