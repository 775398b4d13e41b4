//! Error types for the request pipeline.

use std::io;

use thiserror::Error;

/// Failures raised by an [`HttpExecutor`](crate::HttpExecutor) while
/// performing a request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The connection failed or the body could not be read.
    #[error("network error contacting {url}: {source}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Request URL.
        url: String,
    },
}

impl TransportError {
    /// URL of the failed request.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Timeout { url } => url,
        }
    }
}

/// Errors returned by [`OsrmClient`](crate::OsrmClient).
///
/// A response whose `code` is not `Ok` is not an error at this level; it
/// decodes into the requested type and the caller inspects the code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OsrmError {
    /// The base URL given to the client could not be parsed.
    #[error("invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The base URL parsed but cannot address an HTTP routing engine.
    #[error("unsupported base URL {url}: {reason}")]
    UnsupportedBaseUrl {
        /// The rejected input.
        url: String,
        /// Why the URL was rejected.
        reason: &'static str,
    },
    /// The default HTTP executor could not be built.
    #[error("failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),
    /// A request URL handed to [`fetch`](crate::OsrmClient::fetch) is malformed.
    #[error("invalid request URL {url}: {source}")]
    InvalidRequestUrl {
        /// The rejected input.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The request failed in transit.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The caller cancelled the request before a response arrived.
    #[error("request to {url} was cancelled")]
    Cancelled {
        /// Request URL.
        url: String,
    },
    /// The admission gate was closed while waiting for a slot.
    #[error("admission gate closed")]
    GateClosed,
    /// The body is not valid JSON or does not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Map a `reqwest` failure onto [`TransportError`].
pub(crate) fn convert_reqwest_error(error: reqwest::Error, url: &str) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout {
            url: url.to_owned(),
        };
    }

    TransportError::Network {
        url: url.to_owned(),
        source: io::Error::other(error),
    }
}
