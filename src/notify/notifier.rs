//! Notification delivery trait.

use crate::error::Result;
use async_trait::async_trait;

/// Delivers one change notification to its destination.
///
/// The watcher treats delivery as best-effort: it spawns `notify` for each
/// detected change and deliberately discards the outcome, logging failures and
/// handing them to an optional error hook. Implementations should therefore
/// report failures through the returned `Result` rather than retrying or
/// logging internally.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the given request URL.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller decides whether anyone
    /// gets to see it.
    async fn notify(&self, url: &str) -> Result<()>;

    /// Short name for this delivery mechanism (for logging/debugging).
    fn name(&self) -> &'static str;
}
