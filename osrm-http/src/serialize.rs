//! Delimited rendering of parameter lists.
//!
//! The engine accepts list-valued parameters as a single string with a fixed
//! separator (`;` between items, `,` inside a coordinate or bearing). The set
//! of element kinds is closed: [`Values`] names every kind the engine
//! accepts, so an unsupported kind does not compile.

use osrm_core::{Approach, Bearing, Coordinate};

/// A borrowed homogeneous list of parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Values<'a> {
    /// Unsigned indices, rendered in decimal.
    U16(&'a [u16]),
    /// Signed integers such as UNIX timestamps, rendered in decimal.
    I64(&'a [i64]),
    /// Floats, rendered with six fractional digits.
    F32(&'a [f32]),
    /// Strings, rendered verbatim.
    Str(&'a [&'a str]),
    /// Approach restrictions, rendered as their wire names.
    Approach(&'a [Approach]),
    /// Bearings, rendered as `value,range`.
    Bearing(&'a [Bearing]),
    /// Coordinates, rendered as `lng,lat` with six fractional digits each.
    Coordinate(&'a [Coordinate]),
}

macro_rules! impl_from_slices {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<&'a [$ty]> for Values<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    Self::$variant(values)
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for Values<'a> {
                fn from(values: &'a [$ty; N]) -> Self {
                    Self::$variant(values)
                }
            }

            impl<'a> From<&'a Vec<$ty>> for Values<'a> {
                fn from(values: &'a Vec<$ty>) -> Self {
                    Self::$variant(values)
                }
            }
        )+
    };
}

impl_from_slices!(
    U16 => u16,
    I64 => i64,
    F32 => f32,
    Approach => Approach,
    Bearing => Bearing,
    Coordinate => Coordinate,
);

impl<'a> From<&'a [&'a str]> for Values<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Self::Str(values)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Values<'a> {
    fn from(values: &'a [&'a str; N]) -> Self {
        Self::Str(values)
    }
}

/// Render `values` separated by `separator`.
///
/// The output holds exactly `len - 1` separators and never a trailing one;
/// an empty list renders as an empty string.
///
/// # Examples
///
/// ```
/// use osrm_core::{Bearing, Coordinate};
/// use osrm_http::serialize::join;
///
/// assert_eq!(join(&[1u16, 2, 3], ";"), "1;2;3");
/// assert_eq!(join(&[Bearing::new(150, 100)], ";"), "150,100");
/// assert_eq!(
///     join(&[Coordinate::new(1.0, 2.0)], ";"),
///     "1.000000,2.000000"
/// );
/// ```
pub fn join<'a>(values: impl Into<Values<'a>>, separator: &str) -> String {
    match values.into() {
        Values::U16(items) => render(items, separator, u16::to_string),
        Values::I64(items) => render(items, separator, i64::to_string),
        Values::F32(items) => render(items, separator, |value| format!("{value:.6}")),
        Values::Str(items) => items.join(separator),
        Values::Approach(items) => render(items, separator, |approach| {
            approach.as_str().to_owned()
        }),
        Values::Bearing(items) => render(items, separator, |bearing| {
            format!("{},{}", bearing.value, bearing.range)
        }),
        Values::Coordinate(items) => render(items, separator, format_coordinate),
    }
}

/// Render a coordinate as `lng,lat` with six fractional digits each.
pub(crate) fn format_coordinate(coordinate: &Coordinate) -> String {
    format!("{:.6},{:.6}", coordinate.lng, coordinate.lat)
}

fn render<T>(items: &[T], separator: &str, format: impl Fn(&T) -> String) -> String {
    items.iter().map(format).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Values::U16(&[1, 2, 3]), "1;2;3")]
    #[case(Values::I64(&[1, 2, 3]), "1;2;3")]
    #[case(Values::F32(&[1.0, 2.0, 3.0]), "1.000000;2.000000;3.000000")]
    #[case(Values::Str(&["abc", "qwe"]), "abc;qwe")]
    #[case(Values::Approach(&[Approach::Curb]), "curb")]
    #[case(
        Values::Bearing(&[
            Bearing { value: 150, range: 100 },
            Bearing { value: 200, range: 100 },
        ]),
        "150,100;200,100"
    )]
    #[case(
        Values::Coordinate(&[
            Coordinate { lng: 1.0, lat: 2.0 },
            Coordinate { lng: 10.0, lat: 20.0 },
        ]),
        "1.000000,2.000000;10.000000,20.000000"
    )]
    fn renders_each_kind(#[case] values: Values<'static>, #[case] expected: &str) {
        assert_eq!(join(values, ";"), expected);
    }

    #[rstest]
    #[case(Values::U16(&[]))]
    #[case(Values::Str(&[]))]
    #[case(Values::Coordinate(&[]))]
    fn empty_input_renders_empty_string(#[case] values: Values<'static>) {
        assert_eq!(join(values, ";"), "");
    }

    #[rstest]
    fn negative_values_keep_their_sign() {
        assert_eq!(join(&[-1_i64, 5], ","), "-1,5");
        assert_eq!(
            join(&[Coordinate::new(-0.1, -51.5)], ";"),
            "-0.100000,-51.500000"
        );
    }

    #[rstest]
    fn accepts_multi_character_separators() {
        assert_eq!(join(&[1_u16, 2], ", "), "1, 2");
    }

    proptest! {
        #[test]
        fn separators_count_is_one_less_than_items(
            items in proptest::collection::vec(any::<u16>(), 1..32),
        ) {
            let rendered = join(&items, ";");
            prop_assert_eq!(rendered.matches(';').count(), items.len() - 1);
            prop_assert!(!rendered.ends_with(';'));
        }

        #[test]
        fn every_kind_places_one_separator_between_items(
            ints in proptest::collection::vec(any::<i64>(), 1..16),
            floats in proptest::collection::vec(-1.0e6_f32..1.0e6, 1..16),
            words in proptest::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..16),
            approaches in proptest::collection::vec(
                proptest::sample::select(Approach::ALL.to_vec()),
                1..16,
            ),
            bearings in proptest::collection::vec((0_u16..=360, 0_u16..=180), 1..16),
            coordinates in proptest::collection::vec(
                (-180.0_f64..180.0, -90.0_f64..90.0),
                1..16,
            ),
        ) {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            let bearings: Vec<Bearing> = bearings
                .into_iter()
                .map(|(value, range)| Bearing::new(value, range))
                .collect();
            let coordinates: Vec<Coordinate> = coordinates
                .into_iter()
                .map(|(lng, lat)| Coordinate::new(lng, lat))
                .collect();

            let cases = [
                (join(&ints, ";"), ints.len()),
                (join(&floats, ";"), floats.len()),
                (join(words.as_slice(), ";"), words.len()),
                (join(&approaches, ";"), approaches.len()),
                (join(&bearings, ";"), bearings.len()),
                (join(&coordinates, ";"), coordinates.len()),
            ];
            for (rendered, len) in cases {
                prop_assert_eq!(rendered.matches(';').count(), len - 1);
                prop_assert!(!rendered.ends_with(';'));
                prop_assert!(!rendered.starts_with(';'));
            }
        }

        #[test]
        fn coordinates_use_six_fractional_digits(
            lng in -180.0_f64..180.0,
            lat in -90.0_f64..90.0,
        ) {
            let rendered = join(&[Coordinate::new(lng, lat)], ";");
            let (lng_part, lat_part) = rendered
                .split_once(',')
                .expect("coordinate should contain a comma");
            for part in [lng_part, lat_part] {
                let (_, fraction) = part.split_once('.').expect("value should be fixed-point");
                prop_assert_eq!(fraction.len(), 6);
            }
        }
    }
}
