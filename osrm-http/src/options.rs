//! Query-string options for service requests.
//!
//! A [`RequestOption`] captures one query key and its rendered value. Options
//! are plain values: they can be built ahead of time, cloned, stored and
//! applied to any number of URLs. Applying a sequence of options is
//! order-sensitive; when two options share a key, the later one wins.
//!
//! # Examples
//!
//! ```
//! use osrm_core::{Geometry, Overview};
//! use osrm_http::{RequestOption, apply_options};
//! use url::Url;
//!
//! let mut url = Url::parse("http://localhost:5000/route/v1/car/1,2;3,4.json")?;
//! apply_options(
//!     &mut url,
//!     &[
//!         RequestOption::geometries(Geometry::GeoJson),
//!         RequestOption::overview(Overview::False),
//!         RequestOption::steps(true),
//!     ],
//! );
//! assert_eq!(url.query(), Some("geometries=geojson&overview=false&steps=true"));
//! # Ok::<(), url::ParseError>(())
//! ```

use std::borrow::Cow;

use osrm_core::{
    Annotations, Approach, Bearing, ContinueStraight, Destination, FallbackCoordinate, Gaps,
    Geometry, Overview, Snapping, Source,
};
use url::Url;

use crate::serialize::join;

const LIST_SEPARATOR: &str = ";";

/// A deferred mutation of a request URL's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOption {
    key: Cow<'static, str>,
    value: String,
}

impl RequestOption {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: value.into(),
        }
    }

    /// Query key this option sets.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rendered value, before URL encoding.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set this option's key on `url`, replacing any previous value.
    pub fn apply(&self, url: &mut Url) {
        set_query_param(url, &self.key, &self.value);
    }

    /// Number of nearest segments to return. Nearest service only.
    #[must_use]
    pub fn number(number: u8) -> Self {
        Self::new("number", number.to_string())
    }

    /// Search for alternative routes. Route service only.
    #[must_use]
    pub fn alternatives(alternatives: bool) -> Self {
        Self::new("alternatives", alternatives.to_string())
    }

    /// Return route steps for each leg.
    #[must_use]
    pub fn steps(steps: bool) -> Self {
        Self::new("steps", steps.to_string())
    }

    /// Return additional per-segment metadata.
    #[must_use]
    pub fn annotations(annotations: Annotations) -> Self {
        Self::new("annotations", annotations.as_str())
    }

    /// Format of returned geometries.
    #[must_use]
    pub fn geometries(geometry: Geometry) -> Self {
        Self::new("geometries", geometry.as_str())
    }

    /// Detail of the overview geometry.
    #[must_use]
    pub fn overview(overview: Overview) -> Self {
        Self::new("overview", overview.as_str())
    }

    /// Force the route to keep going straight at waypoints.
    #[must_use]
    pub fn continue_straight(continue_straight: ContinueStraight) -> Self {
        Self::new("continue_straight", continue_straight.as_str())
    }

    /// Indices of the coordinates used as sources. Table service only.
    ///
    /// An empty slice selects every coordinate.
    #[must_use]
    pub fn sources(sources: &[u16]) -> Self {
        Self::new("sources", indices_or_all(sources))
    }

    /// Indices of the coordinates used as destinations. Table service only.
    ///
    /// An empty slice selects every coordinate.
    #[must_use]
    pub fn destinations(destinations: &[u16]) -> Self {
        Self::new("destinations", indices_or_all(destinations))
    }

    /// Speed used to estimate durations for pairs without a route, in
    /// kilometres per hour. Table service only.
    #[must_use]
    pub fn fallback_speed(speed: f64) -> Self {
        Self::new("fallback_speed", format!("{speed:.6}"))
    }

    /// Which coordinate the fallback estimate measures from. Table service
    /// only.
    #[must_use]
    pub fn fallback_coordinate(fallback: FallbackCoordinate) -> Self {
        Self::new("fallback_coordinate", fallback.as_str())
    }

    /// Multiplier applied to table durations. Table service only.
    #[must_use]
    pub fn scale_factor(factor: f64) -> Self {
        Self::new("scale_factor", format!("{factor:.6}"))
    }

    /// UNIX timestamps of the input points. Match service only.
    #[must_use]
    pub fn timestamps(timestamps: &[i64]) -> Self {
        Self::new("timestamps", join(timestamps, LIST_SEPARATOR))
    }

    /// How gaps in the input trace are handled. Match service only.
    #[must_use]
    pub fn gaps(gaps: Gaps) -> Self {
        Self::new("gaps", gaps.as_str())
    }

    /// Remove waypoints that are too close together. Match service only.
    #[must_use]
    pub fn tidy(tidy: bool) -> Self {
        Self::new("tidy", tidy.to_string())
    }

    /// Indices of the coordinates treated as waypoints; the rest become
    /// via points.
    #[must_use]
    pub fn waypoints(waypoints: &[u16]) -> Self {
        Self::new("waypoints", join(waypoints, LIST_SEPARATOR))
    }

    /// Snapping radius in metres for each coordinate.
    ///
    /// An empty slice lifts the limit for every coordinate.
    #[must_use]
    pub fn radiuses(radiuses: &[f32]) -> Self {
        let value = if radiuses.is_empty() {
            "unlimited".to_owned()
        } else {
            join(radiuses, LIST_SEPARATOR)
        };
        Self::new("radiuses", value)
    }

    /// Whether the trip returns to its first location. Trip service only.
    #[must_use]
    pub fn roundtrip(roundtrip: bool) -> Self {
        Self::new("roundtrip", roundtrip.to_string())
    }

    /// Where the trip starts. Trip service only.
    #[must_use]
    pub fn source(source: Source) -> Self {
        Self::new("source", source.as_str())
    }

    /// Where the trip ends. Trip service only.
    #[must_use]
    pub fn destination(destination: Destination) -> Self {
        Self::new("destination", destination.as_str())
    }

    /// Restrict snapping to segments heading in the given directions.
    #[must_use]
    pub fn bearings(bearings: &[Bearing]) -> Self {
        Self::new("bearings", join(bearings, LIST_SEPARATOR))
    }

    /// Ask the engine to return segment hints for each waypoint.
    #[must_use]
    pub fn generate_hints(generate: bool) -> Self {
        Self::new("generate_hints", generate.to_string())
    }

    /// Hints from a previous response, one per coordinate.
    #[must_use]
    pub fn hints<S: AsRef<str>>(hints: &[S]) -> Self {
        Self::new("hints", join_strings(hints))
    }

    /// Side of the road from which each coordinate is approached.
    #[must_use]
    pub fn approaches(approaches: &[Approach]) -> Self {
        Self::new("approaches", join(approaches, LIST_SEPARATOR))
    }

    /// Road classes to avoid, such as `motorway` or `toll`.
    #[must_use]
    pub fn exclude<S: AsRef<str>>(classes: &[S]) -> Self {
        Self::new("exclude", join_strings(classes))
    }

    /// Which edges coordinates may snap to.
    #[must_use]
    pub fn snapping(snapping: Snapping) -> Self {
        Self::new("snapping", snapping.as_str())
    }

    /// Omit waypoints from the response body.
    #[must_use]
    pub fn skip_waypoints(skip: bool) -> Self {
        Self::new("skip_waypoints", skip.to_string())
    }

    /// An arbitrary query pair, for parameters without a dedicated
    /// constructor.
    #[must_use]
    pub fn custom(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Cow::Owned(key.into()),
            value: value.into(),
        }
    }
}

fn indices_or_all(indices: &[u16]) -> String {
    if indices.is_empty() {
        "all".to_owned()
    } else {
        join(indices, LIST_SEPARATOR)
    }
}

fn join_strings<S: AsRef<str>>(values: &[S]) -> String {
    let borrowed: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    join(borrowed.as_slice(), LIST_SEPARATOR)
}

/// Apply `options` to `url` in slice order.
pub fn apply_options(url: &mut Url, options: &[RequestOption]) {
    for option in options {
        option.apply(url);
    }
}

/// Set `key` to `value` in the query of `url`.
///
/// Every existing value of `key` is replaced by the single new value. The
/// first occurrence keeps its position; an absent key is appended. Other
/// pairs are left untouched.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut replaced = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter_map(|(existing_key, existing_value)| {
            if existing_key != key {
                return Some((existing_key, existing_value));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((existing_key, value.to_owned()))
        })
        .collect();

    let mut query = url.query_pairs_mut();
    query.clear().extend_pairs(&pairs);
    if !replaced {
        query.append_pair(key, value);
    }
}
