//! Per-pixel evaluation of index formulas
//!
//! An index table is an enum implementing [`IndexFormula`]: each variant
//! names the bands it reads and maps one pixel of those bands to a value.
//! [`evaluate`] looks the bands up in a [`Dataset`], checks them, and runs
//! the formula over every cell.

use crate::maybe_rayon::*;
use bandix_core::{Band, Dataset, Error, Result};
use ndarray::{ArrayD, IxDyn};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A band an index formula can reference.
pub trait SpectralBand: Copy + fmt::Debug + Send + Sync + 'static {
    /// Name of the band inside a [`Dataset`]
    fn name(self) -> &'static str;
}

/// The values of one pixel, one field per band of a family.
pub trait PixelValues<B: SpectralBand>: Default + Send + Sync {
    fn set(&mut self, band: B, value: f64);
}

/// A named spectral index with a fixed formula.
pub trait IndexFormula:
    Copy + fmt::Display + FromStr<Err = Error> + Send + Sync + 'static
{
    type Band: SpectralBand;
    type Pixel: PixelValues<Self::Band>;

    /// Every index of the table, in documentation order
    const ALL: &'static [Self];

    /// Public identifier, e.g. `"NDVI"`
    fn name(self) -> &'static str;

    /// Bands read by the formula
    fn required_bands(self) -> &'static [Self::Band];

    /// Evaluate the formula for one pixel
    fn apply(self, pixel: &Self::Pixel) -> f64;

    /// Whether the formula's constants assume reflectance in 0.0-1.0
    fn is_coefficient_based(self) -> bool {
        false
    }
}

/// Look up an index by its public identifier (case-sensitive).
pub(crate) fn parse_index<F: IndexFormula>(name: &str) -> Result<F> {
    F::ALL
        .iter()
        .copied()
        .find(|index| index.name() == name)
        .ok_or_else(|| Error::UnknownIndex {
            index: name.to_string(),
            valid: F::ALL
                .iter()
                .map(|index| index.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Compute `index` over `dataset`, dividing every band value by `scale` first.
///
/// Pass `scale = 1.0` to evaluate raw values. The output has the shape of
/// the input bands. Arithmetic follows IEEE rules: a zero denominator gives
/// NaN or infinity, not an error.
///
/// # Errors
/// - [`Error::MissingBands`] listing every referenced band absent from `dataset`
/// - [`Error::ShapeMismatch`] if the referenced bands differ in shape
pub fn evaluate<F: IndexFormula>(index: F, dataset: &Dataset, scale: f64) -> Result<Band> {
    let mut inputs = Vec::with_capacity(index.required_bands().len());
    let mut missing = Vec::new();
    for &band in index.required_bands() {
        match dataset.get(band.name()) {
            Some(data) => inputs.push((band, data)),
            None => missing.push(band.name().to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(Error::MissingBands {
            index: index.to_string(),
            bands: missing,
        });
    }

    debug_assert!(!inputs.is_empty(), "{} references no bands", index);
    let shape = inputs
        .first()
        .map(|(_, data)| data.shape().to_vec())
        .unwrap_or_default();
    for (band, data) in &inputs {
        if data.shape() != shape.as_slice() {
            return Err(Error::ShapeMismatch {
                band: band.name().to_string(),
                expected: shape,
                actual: data.shape().to_vec(),
            });
        }
    }

    // Borrow contiguous bands; copy the rest out in logical (row-major) order
    let columns: Vec<(F::Band, Cow<'_, [f64]>)> = inputs
        .iter()
        .map(|&(band, data)| {
            let values = match data.as_slice() {
                Some(values) => Cow::Borrowed(values),
                None => Cow::Owned(data.iter().copied().collect()),
            };
            (band, values)
        })
        .collect();

    let cells: usize = shape.iter().product();
    let data: Vec<f64> = (0..cells)
        .into_par_iter()
        .map(|cell| {
            let mut pixel = F::Pixel::default();
            for (band, values) in &columns {
                pixel.set(*band, values[cell] / scale);
            }
            index.apply(&pixel)
        })
        .collect();

    ArrayD::from_shape_vec(IxDyn(&shape), data).map_err(|e| Error::Other(e.to_string()))
}
