//! Client configuration.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::OsrmError;
use crate::transport::Transport;

/// Default user agent for engine requests.
pub const DEFAULT_USER_AGENT: &str = "osrm-client/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the default HTTP transport.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use osrm_http::HttpClientConfig;
///
/// let config = HttpClientConfig::new()
///     .with_max_concurrency(8)
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.max_concurrency, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Maximum number of requests in flight at once; zero means unlimited.
    pub max_concurrency: usize,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 0,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpClientConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of concurrent requests.
    #[must_use]
    pub const fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a `reqwest` client honouring the timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`OsrmError::BuildHttpClient`] if the client cannot be built.
    pub fn build_executor(&self) -> Result<Client, OsrmError> {
        Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()
            .map_err(OsrmError::BuildHttpClient)
    }

    /// Build a [`Transport`] over a `reqwest` client with this
    /// configuration's concurrency limit.
    ///
    /// # Errors
    ///
    /// Returns [`OsrmError::BuildHttpClient`] if the client cannot be built.
    pub fn build_transport(&self) -> Result<Transport, OsrmError> {
        let client = self.build_executor()?;
        Ok(Transport::new(Arc::new(client), self.max_concurrency))
    }
}
