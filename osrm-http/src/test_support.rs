//! Test utilities for the request pipeline.
//!
//! This module provides [`StubExecutor`], a deterministic [`HttpExecutor`]
//! that returns canned responses without touching the network, and records
//! how it was called.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;
use crate::transport::{HttpExecutor, HttpResponse};

/// Stub [`HttpExecutor`] for tests.
///
/// Clones share their call statistics, so a test can hand one clone to a
/// [`Transport`](crate::Transport) and inspect the other.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use osrm_http::Transport;
/// use osrm_http::test_support::{StubExecutor, block_on_for_tests};
/// use url::Url;
///
/// let stub = StubExecutor::with_json(r#"{"code":"Ok"}"#);
/// let transport = Transport::new(Arc::new(stub.clone()), 1);
/// let url = Url::parse("http://localhost:5000/").expect("valid URL");
///
/// let response = block_on_for_tests(transport.execute(&url))
///     .expect("test runtime should build")
///     .expect("stub should answer");
/// assert_eq!(response.status, 200);
/// assert_eq!(stub.calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StubExecutor {
    response: StubResponse,
    delay: Option<Duration>,
    stats: Arc<Stats>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Body { status: u16, body: Vec<u8> },
    NetworkError(String),
    Timeout,
}

#[derive(Debug, Default)]
struct Stats {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    last_url: Mutex<Option<Url>>,
}

impl StubExecutor {
    fn new(response: StubResponse) -> Self {
        Self {
            response,
            delay: None,
            stats: Arc::new(Stats::default()),
        }
    }

    /// Answer every request with status 200 and `body`.
    #[must_use]
    pub fn with_json(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    /// Answer every request with `status` and `body`.
    #[must_use]
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::new(StubResponse::Body {
            status,
            body: body.into().into_bytes(),
        })
    }

    /// Fail every request with a network error carrying `message`.
    #[must_use]
    pub fn with_network_error(message: impl Into<String>) -> Self {
        Self::new(StubResponse::NetworkError(message.into()))
    }

    /// Fail every request with a timeout.
    #[must_use]
    pub fn with_timeout() -> Self {
        Self::new(StubResponse::Timeout)
    }

    /// Sleep for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.stats.calls.load(Ordering::Acquire)
    }

    /// Highest number of requests observed in flight at once.
    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.stats.peak.load(Ordering::Acquire)
    }

    /// URL of the most recent request.
    #[must_use]
    pub fn last_url(&self) -> Option<Url> {
        self.stats
            .last_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn enter(&self, url: &Url) -> InFlightGuard<'_> {
        self.stats.calls.fetch_add(1, Ordering::AcqRel);
        *self
            .stats
            .last_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(url.clone());
        let current = self.stats.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        self.stats.peak.fetch_max(current, Ordering::AcqRel);
        InFlightGuard { stats: &self.stats }
    }
}

struct InFlightGuard<'a> {
    stats: &'a Stats,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.stats.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

#[async_trait]
impl HttpExecutor for StubExecutor {
    async fn send(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let _guard = self.enter(url);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            StubResponse::Body { status, body } => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            StubResponse::NetworkError(message) => Err(TransportError::Network {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, message.clone()),
            }),
            StubResponse::Timeout => Err(TransportError::Timeout {
                url: url.to_string(),
            }),
        }
    }
}

/// Drive `future` to completion on a fresh current-thread runtime.
///
/// # Errors
///
/// Returns the I/O error raised when the runtime cannot be built.
pub fn block_on_for_tests<F: Future>(future: F) -> io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
