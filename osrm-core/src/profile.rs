//! Transportation profiles.

use std::borrow::Cow;
use std::fmt;

/// Mode of transportation, selecting the routing graph on the server.
///
/// The set of profiles is fixed by the Lua profile the engine data was
/// prepared with, so any name is accepted. The associated constants cover the
/// profiles shipped with OSRM.
///
/// # Examples
///
/// ```
/// use osrm_core::Profile;
///
/// assert_eq!(Profile::FOOT.as_str(), "foot");
/// assert_eq!(Profile::new("truck").to_string(), "truck");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile(Cow<'static, str>);

impl Profile {
    /// The `driving` profile used by the public demo server.
    pub const DRIVING: Self = Self(Cow::Borrowed("driving"));
    /// The `car` profile.
    pub const CAR: Self = Self(Cow::Borrowed("car"));
    /// The `bike` profile.
    pub const BIKE: Self = Self(Cow::Borrowed("bike"));
    /// The `foot` profile.
    pub const FOOT: Self = Self(Cow::Borrowed("foot"));

    /// Construct a profile from an arbitrary name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Name as it appears in the request path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Profile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Profile {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Profile {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Profile::DRIVING, "driving")]
    #[case(Profile::CAR, "car")]
    #[case(Profile::BIKE, "bike")]
    #[case(Profile::FOOT, "foot")]
    fn builtin_profiles_render_their_names(#[case] profile: Profile, #[case] expected: &str) {
        assert_eq!(profile.as_str(), expected);
    }

    #[rstest]
    fn custom_profile_equals_builtin_with_same_name() {
        assert_eq!(Profile::from("car"), Profile::CAR);
    }
}
