//! The request shape shared by the route, table, trip, match and nearest
//! services.

use crate::{Coordinate, Profile};

/// Profile plus ordered coordinates.
///
/// Immutable once built. The nearest service expects exactly one coordinate;
/// this is not enforced here and the engine answers with an error code when
/// the count is wrong.
///
/// # Examples
///
/// ```
/// use osrm_core::{Coordinate, Profile, Request};
///
/// let request = Request::new(Profile::FOOT, [(13.1, 52.1), (13.2, 52.2)]);
/// assert_eq!(request.coordinates()[1], Coordinate::new(13.2, 52.2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    profile: Profile,
    coordinates: Vec<Coordinate>,
}

impl Request {
    /// Construct a request from a profile and coordinates in visiting order.
    #[must_use]
    pub fn new<I>(profile: Profile, coordinates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        Self {
            profile,
            coordinates: coordinates.into_iter().map(Into::into).collect(),
        }
    }

    /// Transportation profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Coordinates in the order supplied.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    #[rstest]
    fn accepts_geo_coordinates() {
        let request = Request::new(Profile::BIKE, [Coord { x: 1.0, y: 2.0 }]);
        assert_eq!(request.coordinates(), &[Coordinate::new(1.0, 2.0)]);
    }

    #[rstest]
    fn preserves_coordinate_order() {
        let request = Request::new(Profile::CAR, [[3.0, 4.0], [1.0, 2.0]]);
        assert_eq!(
            request.coordinates(),
            &[Coordinate::new(3.0, 4.0), Coordinate::new(1.0, 2.0)]
        );
    }
}
