//! Positions and bearing constraints sent to the routing engine.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A `(longitude, latitude)` pair in WGS84 degrees.
///
/// The engine always expects longitude first, both on the wire
/// (`"lng,lat"` in the URL path) and in JSON payloads (`[lng, lat]`).
/// Values are not range-checked; the engine rejects what it cannot snap.
///
/// # Examples
///
/// ```
/// use osrm_core::Coordinate;
///
/// let berlin = Coordinate::new(13.388860, 52.517037);
/// let point: geo::Coord<f64> = berlin.into();
/// assert_eq!(point.x, 13.388860);
/// assert_eq!(point.y, 52.517037);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Coordinate {
    /// Construct a coordinate from longitude and latitude.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lng, value.lat]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lng: value.x,
            lat: value.y,
        }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

/// Restricts snapping to road segments travelled in a given direction.
///
/// `value` is the clockwise angle from true north (0 to 360) and `range` the
/// allowed deviation either side of it (0 to 180). Neither is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bearing {
    /// Bearing in degrees, clockwise from true north.
    pub value: u16,
    /// Allowed deviation in degrees.
    pub range: u16,
}

impl Bearing {
    /// Construct a bearing constraint.
    #[must_use]
    pub const fn new(value: u16, range: u16) -> Self {
        Self { value, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_from_lng_lat_array() {
        let coordinate: Coordinate =
            serde_json::from_str("[13.38886, 52.517037]").expect("should deserialise");
        assert_eq!(coordinate, Coordinate::new(13.38886, 52.517037));
    }

    #[rstest]
    fn encodes_as_lng_lat_array() {
        let json = serde_json::to_string(&Coordinate::new(-0.1, 51.5)).expect("should serialise");
        assert_eq!(json, "[-0.1,51.5]");
    }

    #[rstest]
    fn rejects_arrays_of_wrong_length() {
        let result = serde_json::from_str::<Coordinate>("[1.0, 2.0, 3.0]");
        assert!(result.is_err());
    }

    #[rstest]
    fn converts_from_geo_coord() {
        let coordinate = Coordinate::from(Coord { x: 7.5, y: 46.9 });
        assert_eq!(coordinate.lng, 7.5);
        assert_eq!(coordinate.lat, 46.9);
    }

    #[rstest]
    fn converts_from_tuple_longitude_first() {
        let coordinate = Coordinate::from((1.0, 2.0));
        assert_eq!(<[f64; 2]>::from(coordinate), [1.0, 2.0]);
    }
}
