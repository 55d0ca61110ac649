// Capability traits for dependency injection
//
// Design Decision: One narrow trait per external effect
//
// Each trait names only what the consuming code needs from the outside world:
// open a resource, ask for a payment status, read a revenue total, upload a
// blob, send a mail, read the time. Production wiring hands in the real
// adapters; tests hand in mockall mocks or hand-written fakes.
//
// All traits are Send + Sync so they can live behind Arc<dyn Trait> and be
// shared with the tokio runtime.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Month, Utc};
#[cfg(test)]
use mockall::automock;
use std::path::Path;
use tokio::io::AsyncRead;

/// Readable byte stream returned by [`ResourceOpener::open`]
///
/// The stream is owned by the caller and released when dropped.
pub type ResourceStream = Box<dyn AsyncRead + Send + Unpin>;

/// Opens a named resource (a file in production) for reading
///
/// Usage:
///     let opener: Arc<dyn ResourceOpener> = Arc::new(RealResourceOpener);
///     let stream = opener.open(Path::new("config.json")).await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResourceOpener: Send + Sync {
    /// Open `path` for reading
    ///
    /// # Errors
    /// - Resource not found
    /// - Permission denied
    async fn open(&self, path: &Path) -> Result<ResourceStream>;
}

/// Looks up the payment status of a user
///
/// A status of 200 is the only success signal. Anything else, including a
/// transport failure, counts as a failed payment check.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Return the raw status code reported for `user_id`
    ///
    /// # Errors
    /// - Transport failure (connection refused, DNS, TLS, ...)
    async fn get_status(&self, user_id: &str) -> Result<u16>;
}

/// Reads aggregated revenue for one calendar month
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RevenueReader: Send + Sync {
    /// Total revenue recorded for `month`
    ///
    /// # Errors
    /// - Data source unavailable or corrupt
    async fn monthly_revenue(&self, month: Month) -> Result<f64>;
}

/// Stores a blob under a key (object storage in production)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Store `data` under `key`, replacing any previous content
    ///
    /// # Errors
    /// - Invalid key
    /// - Storage unavailable
    async fn upload(&self, key: &str, data: &[u8]) -> Result<()>;
}

/// Delivers a message body to a recipient
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send `body` to `to`
    ///
    /// # Errors
    /// - Invalid recipient
    /// - Delivery failure
    async fn send(&self, to: &str, body: &str) -> Result<()>;
}

/// Source of the current time
///
/// Anything that depends on "now" reads it through this trait so tests can
/// freeze time.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
