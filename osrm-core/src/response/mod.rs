//! JSON response schemas for the five services.
//!
//! Every response embeds an [`Envelope`] carrying the status code. A body
//! with a non-`Ok` code still decodes; inspect [`ServiceResponse::is_ok`]
//! before trusting the payload fields, which default to empty when the
//! engine omits them.

mod route;
mod waypoint;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::Code;

pub use route::{
    Annotation, Intersection, Lane, Matching, Metadata, Route, RouteLeg, RouteStep, StepManeuver,
};
pub use waypoint::{NearestWaypoint, Tracepoint, TripWaypoint, Waypoint};

/// Fields common to every response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    /// Status code of the request.
    pub code: Code,
    /// Optional human-readable detail, usually set alongside an error code.
    #[serde(default)]
    pub message: Option<String>,
    /// Timestamp of the OSM data the engine was built from.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub data_version: Option<OffsetDateTime>,
}

/// Access to the [`Envelope`] of a decoded response.
pub trait ServiceResponse {
    /// The embedded envelope.
    fn envelope(&self) -> &Envelope;

    /// Status code of the request.
    fn code(&self) -> &Code {
        &self.envelope().code
    }

    /// Detail message, when the engine sent one.
    fn message(&self) -> Option<&str> {
        self.envelope().message.as_deref()
    }

    /// Whether the engine reported success.
    fn is_ok(&self) -> bool {
        self.envelope().code.is_ok()
    }
}

macro_rules! impl_service_response {
    ($($ty:ident $(<$g:ident>)?),+ $(,)?) => {
        $(
            impl$(<$g>)? ServiceResponse for $ty$(<$g>)? {
                fn envelope(&self) -> &Envelope {
                    &self.envelope
                }
            }
        )+
    };
}

impl_service_response!(
    RouteResponse<G>,
    TableResponse,
    TripResponse<G>,
    MatchResponse<G>,
    NearestResponse,
);

/// Response of the route service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteResponse<G> {
    /// Status envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Routes ordered by descending recommendation rank.
    #[serde(default = "Vec::new")]
    pub routes: Vec<Route<G>>,
    /// Snapped input coordinates.
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

/// Response of the table service.
///
/// Matrix cells are `None` when no route exists between the pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableResponse {
    /// Status envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Travel times in seconds, row per source.
    #[serde(default)]
    pub durations: Option<Vec<Vec<Option<f64>>>>,
    /// Travel distances in metres, row per source.
    #[serde(default)]
    pub distances: Option<Vec<Vec<Option<f64>>>>,
    /// Snapped sources.
    #[serde(default)]
    pub sources: Vec<Waypoint>,
    /// Snapped destinations.
    #[serde(default)]
    pub destinations: Vec<Waypoint>,
    /// `[row, column]` of cells estimated with the fallback speed.
    #[serde(default)]
    pub fallback_speed_cells: Option<Vec<[usize; 2]>>,
}

/// Response of the trip service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripResponse<G> {
    /// Status envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Input coordinates with their position in the computed trips.
    #[serde(default)]
    pub waypoints: Vec<TripWaypoint>,
    /// One trip per connected component of the input.
    #[serde(default = "Vec::new")]
    pub trips: Vec<Route<G>>,
}

/// Response of the match service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResponse<G> {
    /// Status envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// One entry per input point; `None` marks outliers that were dropped.
    #[serde(default)]
    pub tracepoints: Vec<Option<Tracepoint>>,
    /// Matched sub-traces.
    #[serde(default = "Vec::new")]
    pub matchings: Vec<Matching<G>>,
}

/// Response of the nearest service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearestResponse {
    /// Status envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Nearest snapped points, closest first.
    #[serde(default)]
    pub waypoints: Vec<NearestWaypoint>,
}
