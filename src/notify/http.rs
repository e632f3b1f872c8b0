//! HTTP notification via fire-and-forget GET requests.

use crate::error::{Result, WatchError};
use crate::notify::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Notifier that issues one GET request per detected change.
///
/// The response body is discarded. A transport failure or a non-success status
/// surfaces as an error so an injected hook can observe it, but nothing
/// retries and no state changes either way.
///
/// # Examples
///
/// ```rust,no_run
/// use textwatch::notify::HttpNotifier;
/// use std::time::Duration;
///
/// # fn example() -> textwatch::error::Result<()> {
/// let notifier = HttpNotifier::with_timeout(Duration::from_secs(5))?;
/// # Ok(())
/// # }
/// ```
pub struct HttpNotifier {
    client: Client,
}

impl HttpNotifier {
    /// Create a notifier with the default 10 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Create a notifier with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WatchError::Notify(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WatchError::Notify(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::EndpointStatus(status.as_u16()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert!(HttpNotifier::new().is_ok());
        assert!(HttpNotifier::with_timeout(Duration::from_millis(100)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let notifier = HttpNotifier::with_timeout(Duration::from_millis(500)).unwrap();
        // Port 9 is the discard port; nothing listens there in CI
        let result = notifier.notify("http://127.0.0.1:9/notify?tval=x").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(HttpNotifier::new().unwrap().name(), "http");
    }
}
