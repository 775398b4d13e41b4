//! Facade crate for the OSRM routing-engine client.
//!
//! This crate re-exports the domain types from `osrm-core` and the request
//! pipeline from `osrm-http`. The `test-support` feature additionally exposes
//! the stub executor used to test code built on the client.

#![forbid(unsafe_code)]

pub use osrm_core::{
    Annotations, Approach, Bearing, Code, ContinueStraight, Coordinate, Destination, Envelope,
    FallbackCoordinate, Gaps, Geometry, GeometryType, LineString, MatchResponse, NearestResponse,
    Overview, Profile, Request, RouteResponse, ServiceResponse, Snapping, Source, TableResponse,
    TripResponse, UnknownValueError, response,
};
pub use osrm_http::{
    Admission, AdmissionGate, CancellationToken, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    HttpClientConfig, HttpExecutor, HttpResponse, OsrmClient, OsrmError, RequestOption, Service,
    Transport, TransportError, apply_options, build_url, request_url, serialize, set_query_param,
};

#[cfg(feature = "test-support")]
pub use osrm_http::test_support;
