//! Named band containers
//!
//! A [`Dataset`] maps band names (`"red"`, `"nir"`, `"VV"`, ...) to
//! N-dimensional `f64` arrays. Every band of a dataset is expected to share
//! one shape; that is the loader's responsibility and is not checked on
//! insert.

use ndarray::{Array, ArrayD, Dimension};
use num_traits::NumCast;
use std::collections::BTreeMap;
use std::ops::Div;

/// A single band: an N-dimensional array of cell values.
pub type Band = ArrayD<f64>;

/// A collection of equally shaped bands keyed by name.
///
/// Cloning a dataset copies every array, so a clone never aliases the
/// original's data.
///
/// # Example
///
/// ```ignore
/// use bandix_core::Dataset;
/// use ndarray::Array2;
///
/// let ds = Dataset::new()
///     .with_band("red", Array2::from_elem((10, 10), 1200.0))
///     .with_band("nir", Array2::from_elem((10, 10), 3400.0));
/// assert_eq!(ds.shape(), Some(&[10, 10][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    bands: BTreeMap<String, Band>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Dataset::insert`]
    pub fn with_band<D: Dimension>(mut self, name: impl Into<String>, data: Array<f64, D>) -> Self {
        self.insert(name, data);
        self
    }

    /// Insert a band, returning the band previously stored under `name`.
    pub fn insert<D: Dimension>(
        &mut self,
        name: impl Into<String>,
        data: Array<f64, D>,
    ) -> Option<Band> {
        self.bands.insert(name.into(), data.into_dyn())
    }

    /// Insert a band of any numeric type, casting every value to `f64`.
    ///
    /// Raw surface reflectance usually arrives as `u16`/`i16`. Values that
    /// have no `f64` representation are stored as NaN.
    pub fn insert_cast<T, D>(&mut self, name: impl Into<String>, data: &Array<T, D>) -> Option<Band>
    where
        T: NumCast + Copy,
        D: Dimension,
    {
        let cast = data.mapv(|v| num_traits::cast::<T, f64>(v).unwrap_or(f64::NAN));
        self.insert(name, cast)
    }

    /// Get a band by name
    pub fn get(&self, name: &str) -> Option<&Band> {
        self.bands.get(name)
    }

    /// Get a mutable band by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Band> {
        self.bands.get_mut(name)
    }

    /// Remove a band, returning it if it was present
    pub fn remove(&mut self, name: &str) -> Option<Band> {
        self.bands.remove(name)
    }

    /// Whether a band named `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.bands.contains_key(name)
    }

    /// Band names in sorted order
    pub fn band_names(&self) -> Vec<String> {
        self.bands.keys().cloned().collect()
    }

    /// Iterate over `(name, band)` pairs in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Band)> {
        self.bands.iter().map(|(name, band)| (name.as_str(), band))
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the dataset holds no bands
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Shape of the first band, or `None` for an empty dataset
    pub fn shape(&self) -> Option<&[usize]> {
        self.bands.values().next().map(|band| band.shape())
    }
}

/// Divide every band by a scalar, producing a new dataset.
impl Div<f64> for &Dataset {
    type Output = Dataset;

    fn div(self, divisor: f64) -> Dataset {
        Dataset {
            bands: self
                .bands
                .iter()
                .map(|(name, band)| (name.clone(), band / divisor))
                .collect(),
        }
    }
}
