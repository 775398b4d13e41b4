//! Typed calls for each engine service.
//!
//! All calls share the same shape: build the service URL from the request,
//! apply the options in order, fetch and decode. Route-like services are
//! generic over the geometry type so the caller picks the decoded
//! representation that matches the `geometries` option it sends.

use osrm_core::{
    GeometryType, MatchResponse, NearestResponse, Request, RouteResponse, TableResponse,
    TripResponse,
};
use tokio_util::sync::CancellationToken;

use crate::client::OsrmClient;
use crate::error::OsrmError;
use crate::options::RequestOption;
use crate::path::Service;

impl OsrmClient {
    /// Fastest route through the request coordinates, in order.
    ///
    /// # Errors
    ///
    /// See [`OsrmClient::fetch`].
    pub async fn route<G: GeometryType>(
        &self,
        cancel: &CancellationToken,
        request: &Request,
        options: &[RequestOption],
    ) -> Result<RouteResponse<G>, OsrmError> {
        self.call(cancel, Service::Route, request, options).await
    }

    /// Duration and distance matrices between the request coordinates.
    ///
    /// # Errors
    ///
    /// See [`OsrmClient::fetch`].
    pub async fn table(
        &self,
        cancel: &CancellationToken,
        request: &Request,
        options: &[RequestOption],
    ) -> Result<TableResponse, OsrmError> {
        self.call(cancel, Service::Table, request, options).await
    }

    /// Shortest round trip visiting every request coordinate.
    ///
    /// # Errors
    ///
    /// See [`OsrmClient::fetch`].
    pub async fn trip<G: GeometryType>(
        &self,
        cancel: &CancellationToken,
        request: &Request,
        options: &[RequestOption],
    ) -> Result<TripResponse<G>, OsrmError> {
        self.call(cancel, Service::Trip, request, options).await
    }

    /// Snap a noisy trace to the road network.
    ///
    /// # Errors
    ///
    /// See [`OsrmClient::fetch`].
    pub async fn match_trace<G: GeometryType>(
        &self,
        cancel: &CancellationToken,
        request: &Request,
        options: &[RequestOption],
    ) -> Result<MatchResponse<G>, OsrmError> {
        self.call(cancel, Service::Match, request, options).await
    }

    /// Nearest road segments to the single request coordinate.
    ///
    /// # Errors
    ///
    /// See [`OsrmClient::fetch`].
    pub async fn nearest(
        &self,
        cancel: &CancellationToken,
        request: &Request,
        options: &[RequestOption],
    ) -> Result<NearestResponse, OsrmError> {
        self.call(cancel, Service::Nearest, request, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transport;
    use crate::test_support::StubExecutor;
    use osrm_core::{Code, Geometry, LineString, Profile, ServiceResponse};
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    const BASE_URL: &str = "http://127.0.0.1:5000";

    #[fixture]
    fn request() -> Request {
        Request::new(
            Profile::CAR,
            [
                (13.388_860, 52.517_037),
                (13.397_634, 52.529_407),
                (13.428_555, 52.523_219),
            ],
        )
    }

    fn client_for(stub: &StubExecutor) -> OsrmClient {
        let transport = Transport::new(Arc::new(stub.clone()), 0);
        OsrmClient::with_transport(BASE_URL, transport).expect("client should build")
    }

    #[rstest]
    #[tokio::test]
    async fn trip_hits_trip_endpoint_with_options(request: Request) {
        let stub = StubExecutor::with_json(
            r#"{
                "code": "Ok",
                "waypoints": [{"location": [13.388799, 52.517033], "trips_index": 0, "waypoint_index": 0}],
                "trips": [{"distance": 10.0, "duration": 2.0, "legs": [],
                           "geometry": {"type": "LineString", "coordinates": [[13.388799, 52.517033]]}}]
            }"#,
        );
        let client = client_for(&stub);

        let response = client
            .trip::<LineString>(
                &CancellationToken::new(),
                &request,
                &[RequestOption::geometries(Geometry::GeoJson)],
            )
            .await
            .expect("trip should decode");

        assert!(response.is_ok());
        assert_eq!(response.trips.len(), 1);
        let url = stub.last_url().expect("request should be recorded");
        assert_eq!(
            url.path(),
            "/trip/v1/car/13.388860,52.517037;13.397634,52.529407;13.428555,52.523219.json"
        );
        assert_eq!(url.query(), Some("geometries=geojson"));
    }

    #[rstest]
    #[tokio::test]
    async fn route_decodes_no_route_code(request: Request) {
        let stub = StubExecutor::with_status(400, r#"{"code":"NoRoute","message":"Impossible route"}"#);
        let client = client_for(&stub);

        let response = client
            .route::<String>(&CancellationToken::new(), &request, &[])
            .await
            .expect("error body should decode");

        assert_eq!(response.code(), &Code::NoRoute);
        assert!(response.routes.is_empty());
        let url = stub.last_url().expect("request should be recorded");
        assert!(url.path().starts_with("/route/v1/car/"));
    }

    #[rstest]
    #[tokio::test]
    async fn table_uses_table_endpoint(request: Request) {
        let stub = StubExecutor::with_json(r#"{"code":"Ok","durations":[[0.0,1.0],[1.0,0.0]]}"#);
        let client = client_for(&stub);

        let response = client
            .table(
                &CancellationToken::new(),
                &request,
                &[RequestOption::sources(&[0]), RequestOption::destinations(&[])],
            )
            .await
            .expect("table should decode");

        assert!(response.durations.is_some());
        let url = stub.last_url().expect("request should be recorded");
        assert!(url.path().starts_with("/table/v1/car/"));
        assert_eq!(url.query(), Some("sources=0&destinations=all"));
    }

    #[rstest]
    #[tokio::test]
    async fn match_trace_uses_match_endpoint(request: Request) {
        let stub = StubExecutor::with_json(r#"{"code":"Ok","tracepoints":[null],"matchings":[]}"#);
        let client = client_for(&stub);

        let response = client
            .match_trace::<String>(
                &CancellationToken::new(),
                &request,
                &[RequestOption::timestamps(&[1, 2, 3])],
            )
            .await
            .expect("match should decode");

        assert_eq!(response.tracepoints, vec![None]);
        let url = stub.last_url().expect("request should be recorded");
        assert!(url.path().starts_with("/match/v1/car/"));
    }

    #[rstest]
    #[tokio::test]
    async fn nearest_uses_nearest_endpoint() {
        let stub = StubExecutor::with_json(
            r#"{"code":"Ok","waypoints":[{"nodes":[1,2],"location":[13.388799,52.517033],"name":"Friedrichstraße"}]}"#,
        );
        let client = client_for(&stub);
        let request = Request::new(Profile::CAR, [(13.388_860, 52.517_037)]);

        let response = client
            .nearest(&CancellationToken::new(), &request, &[RequestOption::number(1)])
            .await
            .expect("nearest should decode");

        assert_eq!(response.waypoints[0].nodes, vec![1, 2]);
        let url = stub.last_url().expect("request should be recorded");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/nearest/v1/car/13.388860,52.517037.json?number=1"
        );
    }
}
