//! In-process notification delivery over a channel.

use crate::error::{Result, WatchError};
use crate::notify::Notifier;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Notifier that hands each built request URL to a local receiver.
///
/// Useful as an injectable test double, and for in-process consumers that want
/// the wire contract without HTTP. Delivery fails once the receiving end is
/// dropped, which the watcher absorbs like any other notification failure.
///
/// # Examples
///
/// ```rust
/// use textwatch::notify::{ChannelNotifier, Notifier};
///
/// # async fn example() -> textwatch::error::Result<()> {
/// let (notifier, mut rx) = ChannelNotifier::new();
/// notifier.notify("/notify?tval=a").await?;
///
/// assert_eq!(rx.recv().await.as_deref(), Some("/notify?tval=a"));
/// # Ok(())
/// # }
/// ```
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Create the notifier together with its receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, url: &str) -> Result<()> {
        self.tx
            .send(url.to_string())
            .map_err(|_| WatchError::ChannelClosed)
    }

    fn name(&self) -> &'static str {
        "channel"
    }
}
