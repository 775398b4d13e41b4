//! Core domain types for the OSRM client.
//!
//! These types describe what is sent to and received from an OSRM routing
//! engine: coordinates, bearings, profiles, the typed option vocabulary, the
//! request shape shared by all services and the JSON response schemas.
//! Nothing in this crate performs I/O; the HTTP pipeline lives in
//! `osrm-http`.
//!
//! # Examples
//!
//! ```
//! use osrm_core::{Coordinate, Profile, Request};
//!
//! let request = Request::new(
//!     Profile::CAR,
//!     [Coordinate::new(13.388860, 52.517037), Coordinate::new(13.397634, 52.529407)],
//! );
//! assert_eq!(request.profile().as_str(), "car");
//! assert_eq!(request.coordinates().len(), 2);
//! ```

#![forbid(unsafe_code)]

mod code;
mod coordinate;
mod geometry;
mod params;
mod profile;
mod request;
pub mod response;

pub use code::Code;
pub use coordinate::{Bearing, Coordinate};
pub use geometry::{GeometryType, LineString};
pub use params::{
    Annotations, Approach, ContinueStraight, Destination, FallbackCoordinate, Gaps, Geometry,
    Overview, Snapping, Source, UnknownValueError,
};
pub use profile::Profile;
pub use request::Request;
pub use response::{
    Envelope, MatchResponse, NearestResponse, RouteResponse, ServiceResponse, TableResponse,
    TripResponse,
};
