//! Index calculation over datasets
//!
//! Computes one or more named indices and writes each result back into the
//! dataset as a new band. Each variant has two entry points:
//!
//! - [`optical_indices`] / [`sar_indices`] borrow the input and return a
//!   modified deep copy, leaving the caller's dataset untouched.
//! - [`optical_indices_in_place`] / [`sar_indices_in_place`] add the bands
//!   to the caller's dataset directly.
//!
//! Indices are computed in request order. A failing index aborts the call;
//! bands already written by the same call are not rolled back.

use super::formula::{evaluate, IndexFormula};
use super::optical::OpticalIndex;
use super::sar::SarIndex;
use bandix_core::{Algorithm, Dataset, Error, Result};
use std::fmt;
use tracing::{debug, warn};

/// Divisor converting integer-encoded surface reflectance (0-10000) to 0.0-1.0
pub const REFLECTANCE_SCALE: f64 = 10000.0;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Ordered index identifiers, e.g. `["NDVI", "NBR"]`.
///
/// A single identifier and a one-element list build the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSelection(Vec<String>);

impl IndexSelection {
    pub fn new<I, S>(indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(indices.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for IndexSelection {
    fn from(index: &str) -> Self {
        Self(vec![index.to_string()])
    }
}

impl From<String> for IndexSelection {
    fn from(index: String) -> Self {
        Self(vec![index])
    }
}

impl From<Vec<String>> for IndexSelection {
    fn from(indices: Vec<String>) -> Self {
        Self(indices)
    }
}

impl From<Vec<&str>> for IndexSelection {
    fn from(indices: Vec<&str>) -> Self {
        Self::new(indices)
    }
}

impl From<&[&str]> for IndexSelection {
    fn from(indices: &[&str]) -> Self {
        Self::new(indices.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for IndexSelection {
    fn from(indices: [&str; N]) -> Self {
        Self::new(indices)
    }
}

/// Names under which computed indices are stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputNames {
    /// Store each result under its index identifier (`"NDVI"`, ...)
    #[default]
    IndexName,
    /// Custom name for a request holding exactly one index
    Single(String),
    /// One custom name per requested index, in request order
    PerIndex(Vec<String>),
}

impl OutputNames {
    /// Custom name for each requested index, `None` where the identifier is used.
    fn resolve(&self, indices: &IndexSelection) -> Result<Vec<Option<String>>> {
        match self {
            OutputNames::IndexName => Ok(vec![None; indices.len()]),
            OutputNames::Single(name) => {
                if indices.len() > 1 {
                    return Err(Error::InvalidParameter {
                        name: "output_names",
                        value: name.clone(),
                        reason: format!(
                            "one name cannot hold {} indices; pass one name per index",
                            indices.len()
                        ),
                    });
                }
                check_output_name(name)?;
                Ok(vec![Some(name.clone()); indices.len()])
            }
            OutputNames::PerIndex(names) => {
                if names.len() != indices.len() {
                    return Err(Error::InvalidParameter {
                        name: "output_names",
                        value: format!("{:?}", names),
                        reason: format!(
                            "{} names given for {} indices",
                            names.len(),
                            indices.len()
                        ),
                    });
                }
                for (i, name) in names.iter().enumerate() {
                    check_output_name(name)?;
                    if names[..i].contains(name) {
                        return Err(Error::InvalidParameter {
                            name: "output_names",
                            value: name.clone(),
                            reason: "each index needs its own output name".into(),
                        });
                    }
                }
                Ok(names.iter().cloned().map(Some).collect())
            }
        }
    }
}

impl From<&str> for OutputNames {
    fn from(name: &str) -> Self {
        OutputNames::Single(name.to_string())
    }
}

impl From<Vec<&str>> for OutputNames {
    fn from(names: Vec<&str>) -> Self {
        OutputNames::PerIndex(names.into_iter().map(String::from).collect())
    }
}

fn check_output_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidParameter {
            name: "output_names",
            value: format!("{:?}", name),
            reason: "band names must not be blank".into(),
        });
    }
    Ok(())
}

/// Parameters for optical index calculation
#[derive(Debug, Clone)]
pub struct OpticalParams {
    /// Indices to compute, in order
    pub indices: IndexSelection,
    /// Names of the output bands
    pub output_names: OutputNames,
    /// Divide band values by `scale_factor` before evaluating formulas.
    /// Default: true
    pub normalise: bool,
    /// Reflectance divisor used when `normalise` is set.
    /// Default: 10000.0
    pub scale_factor: f64,
    /// Remove the dataset's original bands once all indices are written.
    /// Default: false
    pub drop_inputs: bool,
}

impl Default for OpticalParams {
    fn default() -> Self {
        Self {
            indices: IndexSelection::default(),
            output_names: OutputNames::default(),
            normalise: true,
            scale_factor: REFLECTANCE_SCALE,
            drop_inputs: false,
        }
    }
}

impl OpticalParams {
    /// Default parameters for the given indices
    pub fn new(indices: impl Into<IndexSelection>) -> Self {
        Self {
            indices: indices.into(),
            ..Self::default()
        }
    }

    fn scale(&self) -> Result<Option<f64>> {
        if !self.normalise {
            return Ok(None);
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "scale_factor",
                value: self.scale_factor.to_string(),
                reason: "must be a finite positive number".into(),
            });
        }
        Ok(Some(self.scale_factor))
    }
}

/// Parameters for SAR index calculation
#[derive(Debug, Clone, Default)]
pub struct SarParams {
    /// Indices to compute, in order
    pub indices: IndexSelection,
    /// Names of the output bands
    pub output_names: OutputNames,
    /// Remove the dataset's original bands once all indices are written.
    /// Default: false
    pub drop_inputs: bool,
}

impl SarParams {
    /// Default parameters for the given indices
    pub fn new(indices: impl Into<IndexSelection>) -> Self {
        Self {
            indices: indices.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A coefficient-based index was computed on unscaled reflectance.
///
/// The call still succeeds; the values are likely meaningless unless the
/// input bands were already in the 0.0-1.0 range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityWarning {
    pub index: String,
}

impl fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coefficient-based index '{}' is normally applied to surface reflectance in the \
             0.0-1.0 range but was applied to unscaled values; this can produce unexpected \
             results, enable `normalise` to scale the bands first",
            self.index
        )
    }
}

/// What a calculation did to the dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexReport {
    /// Output band names, in computation order
    pub written: Vec<String>,
    /// Input bands removed because `drop_inputs` was set
    pub dropped: Vec<String>,
    /// Non-fatal warnings raised during the call
    pub warnings: Vec<CompatibilityWarning>,
}

/// A computed dataset together with its report
#[derive(Debug, Clone)]
pub struct IndexOutput {
    pub dataset: Dataset,
    pub report: IndexReport,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compute optical indices on a copy of `dataset`.
///
/// # Example
/// ```ignore
/// let out = optical_indices(&ds, &OpticalParams::new(["NDVI", "NBR"]))?;
/// let ndvi = out.dataset.get("NDVI").unwrap();
/// ```
pub fn optical_indices(dataset: &Dataset, params: &OpticalParams) -> Result<IndexOutput> {
    let mut dataset = dataset.clone();
    let report = optical_indices_in_place(&mut dataset, params)?;
    Ok(IndexOutput { dataset, report })
}

/// Compute optical indices, adding the result bands to `dataset` itself.
pub fn optical_indices_in_place(
    dataset: &mut Dataset,
    params: &OpticalParams,
) -> Result<IndexReport> {
    let scale = params.scale()?;
    compute_in_place::<OpticalIndex>(
        dataset,
        &params.indices,
        &params.output_names,
        scale,
        params.drop_inputs,
    )
}

/// Compute SAR indices on a copy of `dataset`.
pub fn sar_indices(dataset: &Dataset, params: &SarParams) -> Result<IndexOutput> {
    let mut dataset = dataset.clone();
    let report = sar_indices_in_place(&mut dataset, params)?;
    Ok(IndexOutput { dataset, report })
}

/// Compute SAR indices, adding the result bands to `dataset` itself.
pub fn sar_indices_in_place(dataset: &mut Dataset, params: &SarParams) -> Result<IndexReport> {
    compute_in_place::<SarIndex>(
        dataset,
        &params.indices,
        &params.output_names,
        None,
        params.drop_inputs,
    )
}

fn compute_in_place<F: IndexFormula>(
    dataset: &mut Dataset,
    indices: &IndexSelection,
    output_names: &OutputNames,
    scale: Option<f64>,
    drop_inputs: bool,
) -> Result<IndexReport> {
    if indices.is_empty() {
        return Err(Error::MissingIndex);
    }
    let targets = output_names.resolve(indices)?;

    let inputs = if drop_inputs {
        dataset.band_names()
    } else {
        Vec::new()
    };

    let mut report = IndexReport::default();
    for (identifier, target) in indices.iter().zip(targets) {
        if identifier.trim().is_empty() {
            return Err(Error::MissingIndex);
        }
        let index: F = identifier.parse()?;

        if scale.is_none() && index.is_coefficient_based() {
            let warning = CompatibilityWarning {
                index: index.name().to_string(),
            };
            warn!(index = index.name(), "{}", warning);
            report.warnings.push(warning);
        }

        let band = evaluate(index, dataset, scale.unwrap_or(1.0))?;
        let output = target.unwrap_or_else(|| index.name().to_string());
        debug!(index = index.name(), output = %output, "computed index");
        dataset.insert(output.clone(), band);
        report.written.push(output);
    }

    if drop_inputs {
        let dropped: Vec<String> = inputs
            .into_iter()
            .filter(|name| !report.written.contains(name))
            .collect();
        debug!(bands = ?dropped, "dropping input bands");
        for name in &dropped {
            dataset.remove(name);
        }
        report.dropped = dropped;
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Algorithm trait implementations
// ---------------------------------------------------------------------------

/// Optical index calculator
#[derive(Debug, Clone, Default)]
pub struct OpticalIndices;

impl Algorithm for OpticalIndices {
    type Input = Dataset;
    type Output = IndexOutput;
    type Params = OpticalParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "OpticalIndices"
    }

    fn description(&self) -> &'static str {
        "Compute optical spectral indices (NDVI, EVI, NBR, MNDWI, Tasseled Cap, ...)"
    }

    fn execute(&self, mut input: Dataset, params: OpticalParams) -> Result<IndexOutput> {
        let report = optical_indices_in_place(&mut input, &params)?;
        Ok(IndexOutput {
            dataset: input,
            report,
        })
    }
}

/// SAR index calculator
#[derive(Debug, Clone, Default)]
pub struct SarIndices;

impl Algorithm for SarIndices {
    type Input = Dataset;
    type Output = IndexOutput;
    type Params = SarParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "SarIndices"
    }

    fn description(&self) -> &'static str {
        "Compute SAR polarisation ratios (VH/VV, VV/VH)"
    }

    fn execute(&self, mut input: Dataset, params: SarParams) -> Result<IndexOutput> {
        let report = sar_indices_in_place(&mut input, &params)?;
        Ok(IndexOutput {
            dataset: input,
            report,
        })
    }
}
