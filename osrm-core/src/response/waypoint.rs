//! Snapped input locations.

use serde::Deserialize;

use crate::Coordinate;

/// An input coordinate snapped to the road network.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Waypoint {
    /// Name of the street the coordinate snapped to.
    pub name: String,
    /// Ephemeral segment identifier that speeds up follow-up requests.
    ///
    /// Absent when hints were disabled with `generate_hints=false`.
    pub hint: Option<String>,
    /// Distance in metres from the input coordinate to the snapped location.
    pub distance: f64,
    /// Snapped location.
    pub location: Coordinate,
}

/// Waypoint returned by the nearest service.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NearestWaypoint {
    /// Snapped location and metadata.
    #[serde(flatten)]
    pub waypoint: Waypoint,
    /// OpenStreetMap node ids of the snapped segment.
    pub nodes: Vec<u64>,
}

/// Waypoint returned by the trip service.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TripWaypoint {
    /// Snapped location and metadata.
    #[serde(flatten)]
    pub waypoint: Waypoint,
    /// Index into `trips` of the sub-trip this point belongs to.
    pub trips_index: usize,
    /// Position of the point within its trip.
    pub waypoint_index: usize,
}

/// Point of a map-matched trace.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Tracepoint {
    /// Snapped location and metadata.
    #[serde(flatten)]
    pub waypoint: Waypoint,
    /// Index of the waypoint inside the matched route.
    pub waypoint_index: usize,
    /// Index into `matchings` of the sub-trace this point was matched to.
    pub matchings_index: usize,
    /// Number of probable alternative matchings for this point.
    ///
    /// Zero means the point was matched unambiguously.
    pub alternatives_count: usize,
}
