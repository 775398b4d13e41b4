//! Routes, legs, steps and their annotations.
//!
//! Every type is generic over the geometry representation `G`, which is
//! [`String`] for encoded polylines and [`LineString`](crate::LineString) for
//! GeoJSON. Fields the engine omits decode to their defaults.

use serde::Deserialize;

use crate::Coordinate;

/// A route through the requested waypoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Route<G> {
    /// Distance travelled in metres.
    #[serde(default)]
    pub distance: f64,
    /// Estimated travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Calculated weight of the route.
    #[serde(default)]
    pub weight: f64,
    /// Name of the weight profile used during extraction.
    #[serde(default)]
    pub weight_name: String,
    /// Legs between consecutive waypoints.
    #[serde(default = "Vec::new")]
    pub legs: Vec<RouteLeg<G>>,
    /// Overview geometry, absent with `overview=false`.
    pub geometry: Option<G>,
}

/// A map-matched route with its confidence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Matching<G> {
    /// The matched route.
    #[serde(flatten)]
    pub route: Route<G>,
    /// Confidence between 0 and 1; 1 means very confident.
    #[serde(default)]
    pub confidence: f64,
}

/// The route between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteLeg<G> {
    /// Distance travelled in metres.
    #[serde(default)]
    pub distance: f64,
    /// Estimated travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Summary of the roads taken; depends on `steps`.
    #[serde(default)]
    pub summary: String,
    /// Calculated weight of the leg.
    #[serde(default)]
    pub weight: f64,
    /// Per-segment details, present when annotations were requested.
    pub annotation: Option<Annotation>,
    /// Turn-by-turn steps, present when steps were requested.
    #[serde(default = "Vec::new")]
    pub steps: Vec<RouteStep<G>>,
}

/// A maneuver followed by travel along a single way.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteStep<G> {
    /// Distance to the next step in metres.
    #[serde(default)]
    pub distance: f64,
    /// Estimated travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Calculated weight of the step.
    #[serde(default)]
    pub weight: f64,
    /// Exit numbers or names of the way.
    pub exits: Option<String>,
    /// Name of the way.
    #[serde(default)]
    pub name: String,
    /// Reference number or code of the way.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Pronunciation hint of the way name.
    pub pronunciation: Option<String>,
    /// Name of the rotary, for rotary steps.
    pub rotary_name: Option<String>,
    /// Pronunciation hint of the rotary name.
    pub rotary_pronunciation: Option<String>,
    /// Legal driving side, `left` or `right`.
    #[serde(default)]
    pub driving_side: String,
    /// Destinations signposted on the way.
    pub destinations: Option<String>,
    /// Mode of transportation.
    #[serde(default)]
    pub mode: String,
    /// Intersections passed, the first one being at the maneuver.
    #[serde(default)]
    pub intersections: Vec<Intersection>,
    /// The maneuver starting this step.
    #[serde(default)]
    pub maneuver: StepManeuver,
    /// Unsimplified geometry of the step.
    pub geometry: Option<G>,
}

/// The maneuver at the start of a step.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StepManeuver {
    /// Location of the turn.
    pub location: Coordinate,
    /// Travel direction immediately before the maneuver, degrees from north.
    pub bearing_before: f64,
    /// Travel direction immediately after the maneuver, degrees from north.
    pub bearing_after: f64,
    /// Maneuver type, e.g. `turn` or `depart`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction change, e.g. `left` or `sharp right`.
    pub modifier: Option<String>,
    /// Exit to take at roundabouts.
    pub exit: Option<u16>,
}

/// A cross-way passed along a step.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Intersection {
    /// Location of the intersection.
    pub location: Coordinate,
    /// Bearings of all roads meeting at the intersection.
    pub bearings: Vec<u16>,
    /// Classes of the road exiting the intersection.
    pub classes: Vec<String>,
    /// Whether each road in `bearings` may be entered.
    pub entry: Vec<bool>,
    /// Index into `bearings` of the approach road.
    #[serde(rename = "in")]
    pub in_index: Option<usize>,
    /// Index into `bearings` of the exit road.
    #[serde(rename = "out")]
    pub out_index: Option<usize>,
    /// Turn lanes available at the intersection.
    pub lanes: Vec<Lane>,
}

/// A turn lane at an intersection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Lane {
    /// Road markings for the lane, e.g. `left` or `straight`.
    pub indications: Vec<String>,
    /// Whether the lane is valid for the current maneuver.
    pub valid: bool,
}

/// Fine-grained details for each segment of a leg.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Annotation {
    /// Distance in metres between each pair of coordinates.
    pub distance: Vec<f64>,
    /// Duration in seconds between each pair of coordinates.
    pub duration: Vec<f64>,
    /// Data source index for the speed of each segment.
    pub datasources: Vec<u16>,
    /// OSM node id of each coordinate.
    pub nodes: Vec<u64>,
    /// Weight of each segment, excluding turn costs.
    pub weight: Vec<f64>,
    /// Speed of each segment, rounded to one decimal.
    pub speed: Vec<f64>,
    /// Metadata for the other annotations.
    pub metadata: Option<Metadata>,
}

/// Metadata attached to an [`Annotation`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Names of the data sources referenced by `datasources`.
    pub datasource_names: Vec<String>,
}
