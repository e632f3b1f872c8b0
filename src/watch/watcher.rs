//! The change watcher: bind to a field, detect value changes, notify.

use crate::dom::{ElementLookup, InputSignal, WatchedField};
use crate::error::{Result, WatchError};
use crate::notify::{CallbackUrl, Notifier};
use crate::watch::ChangeWatcherBuilder;
use crate::watch::subscriber::{ChangeSubscribers, SubscriptionHandle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior};

pub(crate) type ErrorHook = Arc<dyn Fn(WatchError) + Send + Sync>;

/// Watches a single text field and notifies an endpoint on every value change.
///
/// On bind, the watcher reads the field's current value and remembers it as
/// the last observed value. Each interaction signal (and, with the timer
/// enabled, each poll tick) triggers a check: if the value differs from the
/// last observed one, the watcher stores the new value, invokes local
/// subscribers, and spawns a fire-and-forget notification whose URL is the
/// callback address with the new value appended as the `tval` parameter.
///
/// All checks for one watcher run on a single task, so no two checks ever
/// interleave. Notifications are spawned and their outcomes discarded; there
/// is no retry, no backpressure, and no ordering guarantee between deliveries.
///
/// # Examples
///
/// ```rust,no_run
/// use textwatch::prelude::*;
/// use std::sync::Arc;
///
/// # async fn example() -> textwatch::error::Result<()> {
/// let registry = FieldRegistry::new();
/// let field = Arc::new(InMemoryField::new(""));
/// registry.register("quote", Arc::clone(&field));
///
/// let watcher = ChangeWatcher::bind(&registry, "quote", "/notify", true)?;
/// assert!(watcher.is_active());
/// # Ok(())
/// # }
/// ```
pub struct ChangeWatcher {
    element_id: String,
    callback: CallbackUrl,
    timer_enabled: bool,
    subscribers: Arc<ChangeSubscribers>,
    changes: Arc<AtomicUsize>,
    task: Option<JoinHandle<()>>,
}

impl ChangeWatcher {
    /// Create a builder for binding a watcher with non-default settings.
    pub fn builder() -> ChangeWatcherBuilder {
        ChangeWatcherBuilder::new()
    }

    /// Bind a watcher with default settings.
    ///
    /// Watches `element_id` for changes over the full signal set and notifies
    /// `callback_url`. With `enable_timer`, the field is additionally polled
    /// every 100 milliseconds to catch changes that raise no signal. Must be
    /// called from within a Tokio runtime.
    ///
    /// A missing element is not an error: the watcher binds inert (see
    /// [`ChangeWatcherBuilder::bind`]).
    ///
    /// # Errors
    ///
    /// Returns an error if no notifier is available (the `http` feature is
    /// disabled and none was injected), or if the default HTTP client cannot
    /// be constructed.
    pub fn bind(
        lookup: &dyn ElementLookup,
        element_id: &str,
        callback_url: &str,
        enable_timer: bool,
    ) -> Result<Self> {
        Self::builder()
            .with_element_id(element_id)
            .with_callback_url(callback_url)
            .with_timer(enable_timer)
            .bind(lookup)
    }

    pub(crate) fn spawn(
        field: Arc<dyn WatchedField>,
        element_id: String,
        callback: CallbackUrl,
        signals: Vec<InputSignal>,
        poll_interval: Option<Duration>,
        notifier: Arc<dyn Notifier>,
        error_hook: Option<ErrorHook>,
    ) -> Self {
        let subscribers = Arc::new(ChangeSubscribers::new());
        let changes = Arc::new(AtomicUsize::new(0));
        let rx = field.subscribe(&signals);

        let detection = Detection {
            last_observed: field.value(),
            field,
            callback: callback.clone(),
            notifier,
            subscribers: Arc::clone(&subscribers),
            changes: Arc::clone(&changes),
            error_hook,
        };
        let task = tokio::spawn(detection.run(rx, poll_interval));

        Self {
            element_id,
            callback,
            timer_enabled: poll_interval.is_some(),
            subscribers,
            changes,
            task: Some(task),
        }
    }

    pub(crate) fn inert(element_id: String, callback: CallbackUrl, timer_enabled: bool) -> Self {
        Self {
            element_id,
            callback,
            timer_enabled,
            subscribers: Arc::new(ChangeSubscribers::new()),
            changes: Arc::new(AtomicUsize::new(0)),
            task: None,
        }
    }

    /// The element id this watcher was bound with.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// The configured callback address, without the appended value parameter.
    pub fn callback_url(&self) -> &str {
        self.callback.base()
    }

    /// Whether the polling fallback is enabled.
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// Whether the detection task is running.
    ///
    /// `false` when the element was missing at bind time or after
    /// [`shutdown`](Self::shutdown).
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Number of changes detected so far (one notification dispatched each).
    pub fn change_count(&self) -> usize {
        self.changes.load(Ordering::SeqCst)
    }

    /// Subscribe a local callback to detected changes.
    ///
    /// The callback runs inside the detection check with each new value,
    /// before the remote notification is spawned. Drop the returned handle to
    /// unsubscribe.
    pub async fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback).await
    }

    /// Stop the detection task.
    ///
    /// Dropping the watcher without calling this leaves the task running for
    /// the life of the runtime, matching the page-lifetime semantics of the
    /// underlying behavior. Already-spawned notifications are not cancelled.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// State owned by the detection task.
struct Detection {
    field: Arc<dyn WatchedField>,
    callback: CallbackUrl,
    last_observed: String,
    notifier: Arc<dyn Notifier>,
    subscribers: Arc<ChangeSubscribers>,
    changes: Arc<AtomicUsize>,
    error_hook: Option<ErrorHook>,
}

impl Detection {
    async fn run(
        mut self,
        mut rx: mpsc::UnboundedReceiver<InputSignal>,
        poll_interval: Option<Duration>,
    ) {
        let mut ticker = poll_interval.map(|period| {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        // An interval's first tick completes immediately; consume it so the
        // first poll lands one full interval after bind
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }

        let mut signals_open = true;
        loop {
            tokio::select! {
                signal = rx.recv(), if signals_open => match signal {
                    Some(_) => self.check().await,
                    None => {
                        signals_open = false;
                        if ticker.is_none() {
                            break;
                        }
                    }
                },
                _ = next_tick(&mut ticker), if ticker.is_some() => self.check().await,
            }
        }
    }

    /// The detection check: compare, store, notify.
    async fn check(&mut self) {
        let current = self.field.value();
        if current == self.last_observed {
            return;
        }
        self.last_observed = current.clone();
        self.changes.fetch_add(1, Ordering::SeqCst);

        self.subscribers.notify_all(&current).await;

        let url = self.callback.with_value(&current);
        let notifier = Arc::clone(&self.notifier);
        let error_hook = self.error_hook.clone();
        tokio::spawn(async move {
            // Best-effort delivery: the outcome is deliberately discarded
            if let Err(err) = notifier.notify(&url).await {
                tracing::debug!(
                    notifier = notifier.name(),
                    url = %url,
                    error = %err,
                    "change notification dropped"
                );
                if let Some(hook) = error_hook {
                    hook(err);
                }
            }
        });
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker.as_mut() {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
