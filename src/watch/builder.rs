//! Builder for binding change watchers.

use crate::dom::{ElementLookup, InputSignal};
use crate::error::{Result, WatchError};
use crate::notify::{CallbackUrl, Notifier};
use crate::watch::watcher::ErrorHook;
use crate::watch::ChangeWatcher;
use std::sync::Arc;
use std::time::Duration;

/// Default poll interval for the timer fallback.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Builder for binding a [`ChangeWatcher`].
///
/// Provides a fluent interface over the three reference inputs (element id,
/// callback URL, timer flag) plus the injectable pieces: signal set, poll
/// interval, notifier, and an error hook for observing dropped notification
/// failures.
///
/// # Examples
///
/// ```rust,no_run
/// use textwatch::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> textwatch::error::Result<()> {
/// let registry = FieldRegistry::new();
/// registry.register("quote", Arc::new(InMemoryField::new("")));
///
/// let watcher = ChangeWatcher::builder()
///     .with_element_id("quote")
///     .with_callback_url("/notify")
///     .with_timer(true)
///     .with_poll_interval(Duration::from_millis(250))
///     .on_notify_error(|err| eprintln!("notification dropped: {err}"))
///     .bind(&registry)?;
/// # Ok(())
/// # }
/// ```
pub struct ChangeWatcherBuilder {
    element_id: Option<String>,
    callback_url: Option<String>,
    enable_timer: bool,
    poll_interval: Duration,
    signals: Vec<InputSignal>,
    notifier: Option<Arc<dyn Notifier>>,
    error_hook: Option<ErrorHook>,
}

impl ChangeWatcherBuilder {
    /// Create a builder with default settings: the full signal set, timer off,
    /// 100 millisecond poll interval.
    pub fn new() -> Self {
        Self {
            element_id: None,
            callback_url: None,
            enable_timer: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            signals: InputSignal::ALL.to_vec(),
            notifier: None,
            error_hook: None,
        }
    }

    /// Set the id of the element to watch. Required.
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    /// Set the callback address to notify on change. Required.
    ///
    /// Treated as an opaque string; the changed value is appended as the
    /// `tval` query parameter at notification time.
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Enable or disable the polling fallback.
    ///
    /// With the timer on, the detection check also runs every poll interval,
    /// catching changes that raise no interaction signal.
    pub fn with_timer(mut self, enable_timer: bool) -> Self {
        self.enable_timer = enable_timer;
        self
    }

    /// Set the poll interval used when the timer is enabled.
    ///
    /// Default is 100 milliseconds.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Restrict the interaction signals that trigger the detection check.
    ///
    /// Default is the full set ([`InputSignal::ALL`]).
    pub fn with_signals(mut self, signals: &[InputSignal]) -> Self {
        self.signals = signals.to_vec();
        self
    }

    /// Inject the notifier used for delivery.
    ///
    /// Default is [`HttpNotifier`](crate::notify::HttpNotifier) when the
    /// `http` feature is enabled; without it a notifier must be injected.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Install a hook observing dropped notification failures.
    ///
    /// Delivery stays best-effort either way; the hook only makes the
    /// discarded errors visible.
    pub fn on_notify_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(WatchError) + Send + Sync + 'static,
    {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Resolve the element and start watching. Must be called from within a
    /// Tokio runtime.
    ///
    /// A missing element is not an error: the reference behavior treats an
    /// empty selection as valid, so the watcher binds inert — visible through
    /// a warning log and [`ChangeWatcher::is_active`] returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the element id or callback URL is missing, or if
    /// no notifier is available.
    pub fn bind(self, lookup: &dyn ElementLookup) -> Result<ChangeWatcher> {
        let element_id = self
            .element_id
            .ok_or(WatchError::MissingInput("element_id"))?;
        let callback_url = self
            .callback_url
            .ok_or(WatchError::MissingInput("callback_url"))?;
        let callback = CallbackUrl::new(callback_url);

        let notifier = match self.notifier {
            Some(notifier) => notifier,
            None => {
                #[cfg(feature = "http")]
                {
                    Arc::new(crate::notify::HttpNotifier::new()?) as Arc<dyn Notifier>
                }
                #[cfg(not(feature = "http"))]
                {
                    return Err(WatchError::MissingNotifier);
                }
            }
        };

        let poll_interval = self.enable_timer.then_some(self.poll_interval);

        match lookup.lookup(&element_id) {
            Some(field) => Ok(ChangeWatcher::spawn(
                field,
                element_id,
                callback,
                self.signals,
                poll_interval,
                notifier,
                self.error_hook,
            )),
            None => {
                tracing::warn!(element_id = %element_id, "element not found, watcher is inert");
                Ok(ChangeWatcher::inert(element_id, callback, self.enable_timer))
            }
        }
    }
}

impl Default for ChangeWatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
