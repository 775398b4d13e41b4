//! Response status codes reported by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status code carried in the `code` field of every response.
///
/// The engine reports semantic failures (no route, too many coordinates, ...)
/// inside an otherwise well-formed JSON body. Codes this crate does not know
/// are kept verbatim in [`Code::Other`].
///
/// # Examples
///
/// ```
/// use osrm_core::Code;
///
/// assert_eq!(Code::from("NoRoute".to_owned()), Code::NoRoute);
/// assert_eq!(Code::from("Throttled".to_owned()).as_str(), "Throttled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Code {
    /// The request was processed as expected.
    Ok,
    /// The URL string is invalid.
    InvalidUrl,
    /// The service name is invalid.
    InvalidService,
    /// The API version is not found.
    InvalidVersion,
    /// The options are invalid.
    InvalidOptions,
    /// The query string is syntactically malformed.
    InvalidQuery,
    /// The parsed query parameters are invalid.
    InvalidValue,
    /// An input coordinate could not snap to a street segment.
    NoSegment,
    /// The request violates a service-specific size restriction.
    TooBig,
    /// No route was found.
    NoRoute,
    /// No table could be computed.
    NoTable,
    /// No match was found.
    NoMatch,
    /// Input coordinates are not connected, so no trip exists.
    NoTrips,
    /// The request is not supported.
    NotImplemented,
    /// Any code not listed above.
    Other(String),
}

impl Code {
    /// Whether the code reports success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The code as sent by the engine.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "Ok",
            Self::InvalidUrl => "InvalidUrl",
            Self::InvalidService => "InvalidService",
            Self::InvalidVersion => "InvalidVersion",
            Self::InvalidOptions => "InvalidOptions",
            Self::InvalidQuery => "InvalidQuery",
            Self::InvalidValue => "InvalidValue",
            Self::NoSegment => "NoSegment",
            Self::TooBig => "TooBig",
            Self::NoRoute => "NoRoute",
            Self::NoTable => "NoTable",
            Self::NoMatch => "NoMatch",
            Self::NoTrips => "NoTrips",
            Self::NotImplemented => "NotImplemented",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for Code {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ok" => Self::Ok,
            "InvalidUrl" => Self::InvalidUrl,
            "InvalidService" => Self::InvalidService,
            "InvalidVersion" => Self::InvalidVersion,
            "InvalidOptions" => Self::InvalidOptions,
            "InvalidQuery" => Self::InvalidQuery,
            "InvalidValue" => Self::InvalidValue,
            "NoSegment" => Self::NoSegment,
            "TooBig" => Self::TooBig,
            "NoRoute" => Self::NoRoute,
            "NoTable" => Self::NoTable,
            "NoMatch" => Self::NoMatch,
            "NoTrips" => Self::NoTrips,
            "NotImplemented" => Self::NotImplemented,
            _ => Self::Other(value),
        }
    }
}

impl From<Code> for String {
    fn from(value: Code) -> Self {
        match value {
            Code::Other(code) => code,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
