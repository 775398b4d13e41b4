//! Closed vocabularies accepted by request options.
//!
//! Each type maps one-to-one onto the strings the engine understands and
//! renders through [`as_str`](Geometry::as_str) or [`Display`](std::fmt::Display).
//! Parsing with [`FromStr`](std::str::FromStr) accepts the same strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A string did not name any variant of an option vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownValueError {
    /// Name of the vocabulary, e.g. `"geometry"`.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation understood by the engine.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValueError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err(UnknownValueError {
                        kind: $kind,
                        value: value.to_owned(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Format of returned route geometries.
    ///
    /// `Polyline` and `Polyline6` decode into [`String`]; `GeoJson` decodes
    /// into [`LineString`](crate::LineString).
    Geometry, "geometry" {
        /// Encoded polyline with precision 5.
        Polyline => "polyline",
        /// Encoded polyline with precision 6.
        Polyline6 => "polyline6",
        /// GeoJSON `LineString`.
        GeoJson => "geojson",
    }
}

wire_enum! {
    /// Level of detail of the overview geometry.
    Overview, "overview" {
        /// Simplified to the highest zoom level it can be displayed at.
        Simplified => "simplified",
        /// Full resolution.
        Full => "full",
        /// No overview geometry.
        False => "false",
    }
}

wire_enum! {
    /// Whether routes keep going straight at waypoints.
    ContinueStraight, "continue_straight" {
        /// Profile default.
        Default => "default",
        /// Forbid u-turns at waypoints.
        True => "true",
        /// Allow u-turns at waypoints.
        False => "false",
    }
}

wire_enum! {
    /// Handling of large timestamp gaps in map matching.
    Gaps, "gaps" {
        /// Split the trace at gaps.
        Split => "split",
        /// Ignore gaps.
        Ignore => "ignore",
    }
}

wire_enum! {
    /// Per-segment metadata returned alongside route geometries.
    Annotations, "annotations" {
        /// All annotations.
        True => "true",
        /// No annotations.
        False => "false",
        /// OSM node ids.
        Nodes => "nodes",
        /// Segment speeds.
        Speed => "speed",
        /// Segment weights.
        Weight => "weight",
        /// Segment distances.
        Distance => "distance",
        /// Segment durations.
        Duration => "duration",
        /// Data source indices.
        DataSources => "datasources",
        /// Durations and distances, as used by the table service.
        DurationDistance => "duration,distance",
    }
}

wire_enum! {
    /// Where a trip starts.
    Source, "source" {
        /// Any coordinate.
        Any => "any",
        /// The first coordinate.
        First => "first",
    }
}

wire_enum! {
    /// Where a trip ends.
    Destination, "destination" {
        /// Any coordinate.
        Any => "any",
        /// The last coordinate.
        Last => "last",
    }
}

wire_enum! {
    /// Side of the road a waypoint is approached from.
    Approach, "approach" {
        /// Arrive on the curb side.
        Curb => "curb",
        /// Either side.
        Unrestricted => "unrestricted",
    }
}

wire_enum! {
    /// Edges a coordinate may snap to.
    Snapping, "snapping" {
        /// Avoid edges marked as non-startpoints by the profile.
        Default => "default",
        /// Any edge in the graph.
        Any => "any",
    }
}

wire_enum! {
    /// Coordinate used for distance estimates when `fallback_speed` applies.
    FallbackCoordinate, "fallback_coordinate" {
        /// The caller-supplied coordinate.
        Input => "input",
        /// The snapped location.
        Snapped => "snapped",
    }
}
