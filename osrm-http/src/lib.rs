//! HTTP request pipeline for an OSRM routing engine.
//!
//! # Responsibilities
//!
//! - Render list-valued parameters ([`serialize`]).
//! - Turn typed [`RequestOption`]s into query parameters, applied in order
//!   with last-write-wins semantics per key.
//! - Build canonical service URLs from a base URL and an
//!   [`osrm_core::Request`].
//! - Execute requests through a [`Transport`] that bounds the number of
//!   requests in flight.
//! - Decode JSON bodies into the typed responses from [`osrm_core`].
//!
//! # Boundaries
//!
//! Engine status codes are exposed, not interpreted: a `NoRoute` answer is a
//! successfully decoded response whose code is not `Ok`. Nothing is retried
//! or cached. The library never installs a logger; it emits through the
//! `log` facade.
//!
//! # Invariants
//!
//! - The base URL of an [`OsrmClient`] never changes after construction.
//! - Request paths always end in `.json`.
//! - Coordinates are rendered longitude first with six fractional digits.
//! - A slot taken from the [`AdmissionGate`] is returned on every exit path,
//!   including cancellation.
//!
//! # Example
//!
//! ```no_run
//! use osrm_core::{Geometry, Profile, Request, ServiceResponse};
//! use osrm_http::{HttpClientConfig, OsrmClient, RequestOption};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), osrm_http::OsrmError> {
//! let config = HttpClientConfig::new().with_max_concurrency(4);
//! let client = OsrmClient::with_config("http://localhost:5000", &config)?;
//! let request = Request::new(Profile::CAR, [(13.388860, 52.517037), (13.397634, 52.529407)]);
//!
//! let response = client
//!     .route::<String>(
//!         &CancellationToken::new(),
//!         &request,
//!         &[RequestOption::geometries(Geometry::Polyline6), RequestOption::steps(true)],
//!     )
//!     .await?;
//! if response.is_ok() {
//!     println!("{} m", response.routes[0].distance);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod options;
mod path;
pub mod serialize;
mod services;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use client::OsrmClient;
pub use config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpClientConfig};
pub use error::{OsrmError, TransportError};
pub use options::{RequestOption, apply_options, set_query_param};
pub use path::{Service, build_url, request_url};
pub use transport::{Admission, AdmissionGate, HttpExecutor, HttpResponse, Transport};
pub use tokio_util::sync::CancellationToken;
