//! Geometry representations returned by the engine.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for super::LineString {}
}

/// Representation of route geometries in a response.
///
/// Pick [`String`] when requesting `polyline` or `polyline6` geometries and
/// [`LineString`] when requesting `geojson`. The choice is made at the call
/// site; a mismatch surfaces as a decode error.
pub trait GeometryType:
    sealed::Sealed + DeserializeOwned + Clone + fmt::Debug + PartialEq + Send + Sync + 'static
{
}

impl GeometryType for String {}
impl GeometryType for LineString {}

/// A GeoJSON `LineString`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineString {
    /// GeoJSON object type, `"LineString"` in practice.
    #[serde(rename = "type")]
    pub kind: String,
    /// Vertices in order.
    pub coordinates: Vec<Coordinate>,
}

impl From<&LineString> for geo::LineString<f64> {
    fn from(value: &LineString) -> Self {
        Self::new(value.coordinates.iter().copied().map(Into::into).collect())
    }
}

impl From<LineString> for geo::LineString<f64> {
    fn from(value: LineString) -> Self {
        Self::from(&value)
    }
}
