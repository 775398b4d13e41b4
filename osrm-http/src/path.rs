//! Request URL construction.
//!
//! Every service shares one path layout:
//!
//! ```text
//! {base path}/{service}/v1/{profile}/{lng,lat};{lng,lat}...json
//! ```
//!
//! The base URL's scheme, host, port and query survive unchanged; only the
//! path is rewritten.

use std::fmt;

use osrm_core::{Coordinate, Profile, Request};
use url::Url;

use crate::serialize::join;

/// The services exposed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Fastest route between coordinates.
    Route,
    /// Duration and distance matrices between coordinates.
    Table,
    /// Travelling-salesman tour through coordinates.
    Trip,
    /// Map matching of a noisy trace.
    Match,
    /// Nearest road segments to a coordinate.
    Nearest,
}

impl Service {
    /// Path segment identifying the service and API version.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Route => "/route/v1",
            Self::Table => "/table/v1",
            Self::Trip => "/trip/v1",
            Self::Match => "/match/v1",
            Self::Nearest => "/nearest/v1",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Build the URL for `service_path` on top of `base`.
///
/// One trailing `/` is trimmed from the base path before the service path,
/// profile and `;`-joined coordinates are appended, followed by `.json`.
/// `base` is not modified.
///
/// # Examples
///
/// ```
/// use osrm_core::{Coordinate, Profile};
/// use osrm_http::build_url;
/// use url::Url;
///
/// let base = Url::parse("http://localhost:5000/osrm/")?;
/// let url = build_url(&base, "/route/v1", &Profile::CAR, &[Coordinate::new(13.1, 52.1)]);
/// assert_eq!(url.as_str(), "http://localhost:5000/osrm/route/v1/car/13.100000,52.100000.json");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn build_url(
    base: &Url,
    service_path: &str,
    profile: &Profile,
    coordinates: &[Coordinate],
) -> Url {
    let base_path = base.path();
    let trimmed = base_path.strip_suffix('/').unwrap_or(base_path);
    let path = format!(
        "{trimmed}{service_path}/{profile}/{coordinates}.json",
        coordinates = join(coordinates, ";"),
    );

    let mut url = base.clone();
    url.set_path(&path);
    url
}

/// Build the URL for `service` from a [`Request`].
#[must_use]
pub fn request_url(base: &Url, service: Service, request: &Request) -> Url {
    build_url(
        base,
        service.path(),
        request.profile(),
        request.coordinates(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(url: &str) -> Url {
        Url::parse(url).expect("valid URL")
    }

    #[rstest]
    fn appends_to_base_path_with_trailing_slash() {
        let url = build_url(
            &parse("http://localhost/foo/"),
            "/route/v1",
            &Profile::CAR,
            &[Coordinate::new(13.1, 52.1), Coordinate::new(13.2, 52.2)],
        );

        assert_eq!(
            url.path(),
            "/foo/route/v1/car/13.100000,52.100000;13.200000,52.200000.json"
        );
    }

    #[rstest]
    fn builds_trip_url_on_bare_host() {
        let request = Request::new(
            Profile::CAR,
            [
                (13.388_860, 52.517_037),
                (13.397_634, 52.529_407),
                (13.428_555, 52.523_219),
            ],
        );

        let url = request_url(&parse("http://127.0.0.1:5000"), Service::Trip, &request);

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/trip/v1/car/13.388860,52.517037;13.397634,52.529407;13.428555,52.523219.json"
        );
    }

    #[rstest]
    #[case(Service::Route, "/route/v1/foot/1.000000,2.000000.json")]
    #[case(Service::Table, "/table/v1/foot/1.000000,2.000000.json")]
    #[case(Service::Trip, "/trip/v1/foot/1.000000,2.000000.json")]
    #[case(Service::Match, "/match/v1/foot/1.000000,2.000000.json")]
    #[case(Service::Nearest, "/nearest/v1/foot/1.000000,2.000000.json")]
    fn every_service_has_its_own_path(#[case] service: Service, #[case] expected: &str) {
        let request = Request::new(Profile::FOOT, [(1.0, 2.0)]);
        let url = request_url(&parse("http://localhost:5000/"), service, &request);
        assert_eq!(url.path(), expected);
    }

    #[rstest]
    fn preserves_base_query_and_port() {
        let base = parse("https://osrm.example.com:8443/api?key=secret");

        let url = build_url(&base, "/nearest/v1", &Profile::BIKE, &[Coordinate::new(1.0, 2.0)]);

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.query(), Some("key=secret"));
        assert_eq!(url.path(), "/api/nearest/v1/bike/1.000000,2.000000.json");
    }

    #[rstest]
    fn leaves_base_untouched() {
        let base = parse("http://localhost:5000/osrm");

        let first = build_url(&base, "/route/v1", &Profile::CAR, &[Coordinate::new(1.0, 2.0)]);
        let second = build_url(&base, "/table/v1", &Profile::CAR, &[Coordinate::new(1.0, 2.0)]);

        assert_eq!(base.as_str(), "http://localhost:5000/osrm");
        assert_eq!(first.path(), "/osrm/route/v1/car/1.000000,2.000000.json");
        assert_eq!(second.path(), "/osrm/table/v1/car/1.000000,2.000000.json");
    }

    #[rstest]
    fn custom_profiles_appear_verbatim() {
        let url = build_url(
            &parse("http://localhost:5000"),
            "/route/v1",
            &Profile::new("truck"),
            &[Coordinate::new(1.0, 2.0)],
        );
        assert!(url.path().starts_with("/route/v1/truck/"));
    }
}
