//! Error types for textwatch.

/// Result type alias for textwatch operations.
pub type Result<T> = std::result::Result<T, WatchError>;

/// Errors that can occur when binding a watcher or delivering a notification.
///
/// Notification errors never reach the caller through the watcher itself:
/// delivery is best-effort and outcomes are discarded after logging. They are
/// surfaced here so that an injected error hook (see
/// [`ChangeWatcherBuilder::on_notify_error`](crate::watch::ChangeWatcherBuilder::on_notify_error))
/// can observe them.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// A required builder input was not provided.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// No notifier was configured and no default is available.
    #[error("No notifier configured (enable the `http` feature or inject one)")]
    MissingNotifier,

    /// The notification request could not be created or sent.
    #[error("Notification failed: {0}")]
    Notify(String),

    /// The notification endpoint answered with a non-success status.
    #[error("Notification endpoint returned status {0}")]
    EndpointStatus(u16),

    /// Channel-based delivery failed because the receiving end is gone.
    #[error("Notification channel closed")]
    ChannelClosed,
}
