//! Concurrency-limited HTTP execution.
//!
//! [`Transport`] pairs an [`HttpExecutor`] with an [`AdmissionGate`]. Every
//! request waits for a slot before it is sent and holds the slot until the
//! body has been read. Slots are returned when the [`Admission`] guard is
//! dropped, so a request that fails, or whose future is dropped while
//! waiting, never leaks a slot.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};
use url::Url;

use crate::error::{OsrmError, TransportError, convert_reqwest_error};

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs a single HTTP `GET`, including reading the body.
#[async_trait]
pub trait HttpExecutor: Send + Sync + fmt::Debug {
    /// Fetch `url` and return its status and body.
    async fn send(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl HttpExecutor for Client {
    async fn send(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .get(url.clone())
            .send()
            .await
            .map_err(|err| convert_reqwest_error(err, url.as_str()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| convert_reqwest_error(err, url.as_str()))?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Counting limiter for in-flight requests.
///
/// A gate built with a capacity of zero admits everything immediately.
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    slots: Option<Arc<Semaphore>>,
    capacity: usize,
    in_flight: Arc<AtomicUsize>,
}

impl AdmissionGate {
    /// Create a gate admitting at most `max_concurrency` holders at once.
    ///
    /// Zero disables the limit. Capacities above
    /// [`Semaphore::MAX_PERMITS`] are clamped to it.
    #[must_use]
    pub fn new(max_concurrency: usize) -> Self {
        let capacity = max_concurrency.min(Semaphore::MAX_PERMITS);
        let slots = (capacity > 0).then(|| Arc::new(Semaphore::new(capacity)));
        Self {
            slots,
            capacity,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wait for a free slot.
    ///
    /// Cancel-safe: dropping the returned future before it resolves leaves
    /// the gate unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AcquireError`] if the underlying semaphore was closed.
    pub async fn acquire(&self) -> Result<Admission, AcquireError> {
        let permit = match &self.slots {
            Some(slots) => Some(Arc::clone(slots).acquire_owned().await?),
            None => None,
        };
        let in_flight = self.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        log::trace!("admitted request ({in_flight} in flight)");
        Ok(Admission {
            _permit: permit,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Maximum number of concurrent holders; zero when unlimited.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the gate enforces a limit.
    #[must_use]
    pub const fn is_limited(&self) -> bool {
        self.slots.is_some()
    }

    /// Free slots, or `None` when unlimited.
    #[must_use]
    pub fn available(&self) -> Option<usize> {
        self.slots.as_ref().map(|slots| slots.available_permits())
    }

    /// Number of admissions currently held.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Proof of admission through an [`AdmissionGate`].
///
/// Dropping it releases the slot.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the admission is dropped"]
pub struct Admission {
    _permit: Option<OwnedSemaphorePermit>,
    in_flight: Arc<AtomicUsize>,
}

impl Drop for Admission {
    fn drop(&mut self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::AcqRel).saturating_sub(1);
        log::trace!("released request slot ({remaining} in flight)");
    }
}

/// An [`HttpExecutor`] behind an [`AdmissionGate`].
#[derive(Debug, Clone)]
pub struct Transport {
    executor: Arc<dyn HttpExecutor>,
    gate: AdmissionGate,
}

impl Transport {
    /// Wrap `executor` with a gate of `max_concurrency` slots; zero means
    /// unlimited.
    #[must_use]
    pub fn new(executor: Arc<dyn HttpExecutor>, max_concurrency: usize) -> Self {
        Self {
            executor,
            gate: AdmissionGate::new(max_concurrency),
        }
    }

    /// The admission gate guarding this transport.
    #[must_use]
    pub const fn gate(&self) -> &AdmissionGate {
        &self.gate
    }

    /// Fetch `url` once a slot is free.
    ///
    /// The slot is held until the body has been read and released on every
    /// exit path.
    ///
    /// # Errors
    ///
    /// Returns [`OsrmError::Transport`] when the executor fails and
    /// [`OsrmError::GateClosed`] if the gate can no longer admit requests.
    pub async fn execute(&self, url: &Url) -> Result<HttpResponse, OsrmError> {
        let _admission = self
            .gate
            .acquire()
            .await
            .map_err(|_| OsrmError::GateClosed)?;
        log::debug!("GET {url}");
        let response = self.executor.send(url).await?;
        Ok(response)
    }
}
