//! Page fetching port.
//!
//! Scans depend only on this trait so the HTTP client can be swapped for a
//! scripted fetcher in tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// Retrieves raw markup for a store promotion page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on network failure, timeout, or a non-2xx
    /// status.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
