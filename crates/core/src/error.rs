//! Error types for bandix

use thiserror::Error;

/// Main error type for bandix operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("geometry contains no coordinates")]
    EmptyGeometry,

    #[error("no remote sensing index was provided (e.g. 'NDVI')")]
    MissingIndex,

    #[error("'{index}' is not a valid remote sensing index; valid options are: {valid}")]
    UnknownIndex { index: String, valid: String },

    #[error("bands required to compute {index} are missing from the dataset: {}", .bands.join(", "))]
    MissingBands { index: String, bands: Vec<String> },

    #[error("band '{band}' has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        band: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error rejects the caller's request rather than its input files.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingIndex
                | Error::UnknownIndex { .. }
                | Error::MissingBands { .. }
                | Error::ShapeMismatch { .. }
                | Error::InvalidParameter { .. }
        )
    }
}

/// Result type alias for bandix operations
pub type Result<T> = std::result::Result<T, Error>;
