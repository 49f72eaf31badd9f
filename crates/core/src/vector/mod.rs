//! Vector helpers
//!
//! Bounding boxes of GeoJSON documents, for clipping dataset loads to an
//! area of interest.

use crate::error::{Error, Result};
use geo::CoordsIter;
use geo_types::{Coord, Geometry, GeometryCollection};
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis-aligned extent of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// `(min_x, max_x)`
    pub x: (f64, f64),
    /// `(min_y, max_y)`
    pub y: (f64, f64),
}

impl BoundingBox {
    /// Enclosing box of every coordinate, computed independently per axis.
    ///
    /// Fails with [`Error::EmptyGeometry`] when the iterator yields nothing.
    pub fn from_coords<I>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coord<f64>>,
    {
        let mut coords = coords.into_iter();
        let first = coords.next().ok_or(Error::EmptyGeometry)?;

        let seed = Self {
            x: (first.x, first.x),
            y: (first.y, first.y),
        };
        Ok(coords.fold(seed, |bbox, c| Self {
            x: (bbox.x.0.min(c.x), bbox.x.1.max(c.x)),
            y: (bbox.y.0.min(c.y), bbox.y.1.max(c.y)),
        }))
    }

    /// `((min_x, max_x), (min_y, max_y))`, the layout datacube loaders take
    /// for their `x` / `y` query ranges.
    pub fn as_tuples(&self) -> ((f64, f64), (f64, f64)) {
        (self.x, self.y)
    }
}

/// Read a GeoJSON file and return the bounding box of all its coordinates.
///
/// Points, line vertices, polygon rings (exterior and interior) and the
/// members of nested geometry collections all contribute. Features with a
/// null geometry are skipped.
///
/// # Errors
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::GeoJson`] if it is not valid GeoJSON
/// - [`Error::EmptyGeometry`] if it contains no coordinates
pub fn read_geojson_bounds<P: AsRef<Path>>(path: P) -> Result<BoundingBox> {
    let text = std::fs::read_to_string(path.as_ref())?;
    geojson_bounds(&text)
}

/// Bounding box of a GeoJSON document held in memory.
pub fn geojson_bounds(text: &str) -> Result<BoundingBox> {
    let geojson: GeoJson = text.parse()?;
    let collection = to_geometry_collection(geojson)?;
    BoundingBox::from_coords(collection.coords_iter())
}

/// Flatten any GeoJSON object into a single geometry collection
fn to_geometry_collection(geojson: GeoJson) -> Result<GeometryCollection<f64>> {
    let geometries: Vec<geojson::Geometry> = match geojson {
        GeoJson::Geometry(geometry) => vec![geometry],
        GeoJson::Feature(feature) => feature.geometry.into_iter().collect(),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .filter_map(|feature| feature.geometry)
            .collect(),
    };

    let converted = geometries
        .into_iter()
        .map(|geometry| Geometry::<f64>::try_from(geometry.value))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(GeometryCollection(converted))
}
