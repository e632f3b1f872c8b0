//! Watched field capabilities and the in-memory implementation.

use crate::dom::InputSignal;
use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Read access to a text field's current value.
pub trait TextField: Send + Sync {
    /// The field's current value.
    fn value(&self) -> String;
}

/// Event subscription on a field.
///
/// The subscriber picks the signals it cares about and receives each firing on
/// the returned channel. A signal carries no payload beyond its own identity;
/// whether the value actually changed is decided by the consumer.
pub trait SignalSource: Send + Sync {
    /// Subscribe to a set of interaction signals.
    ///
    /// Signals outside `signals` are not delivered. The subscription ends when
    /// the receiver is dropped.
    fn subscribe(&self, signals: &[InputSignal]) -> mpsc::UnboundedReceiver<InputSignal>;
}

/// What a watcher binds to: value access plus signal subscription.
pub trait WatchedField: TextField + SignalSource {}

impl<T: TextField + SignalSource> WatchedField for T {}

struct Subscription {
    signals: HashSet<InputSignal>,
    tx: mpsc::UnboundedSender<InputSignal>,
}

/// In-memory text field.
///
/// Holds its value in a lock-free cell and fans interaction signals out to
/// subscribers. There are two mutation paths, matching how real inputs behave:
///
/// - [`set_value`](Self::set_value) is the *programmatic* path. It stores the
///   value and raises no signal, so only a polling watcher will see it.
/// - [`input`](Self::input) models a user edit: it stores the value and raises
///   [`InputSignal::Input`]. Other signals can be raised explicitly with
///   [`dispatch`](Self::dispatch).
///
/// # Examples
///
/// ```rust
/// use textwatch::dom::{InMemoryField, InputSignal, TextField};
///
/// let field = InMemoryField::new("hello");
/// assert_eq!(field.value(), "hello");
///
/// field.set_value("changed silently");
/// field.dispatch(InputSignal::Paste);
/// ```
pub struct InMemoryField {
    value: ArcSwap<String>,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl InMemoryField {
    /// Create a field with an initial value.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: ArcSwap::new(Arc::new(initial.into())),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Replace the value without raising any signal.
    ///
    /// This is the programmatic mutation path. An event-driven watcher will
    /// not see the change until some signal fires; a polling watcher picks it
    /// up within one poll interval.
    pub fn set_value(&self, value: impl Into<String>) {
        self.value.store(Arc::new(value.into()));
    }

    /// Replace the value and raise [`InputSignal::Input`], like a user edit.
    pub fn input(&self, value: impl Into<String>) {
        self.set_value(value);
        self.dispatch(InputSignal::Input);
    }

    /// Raise a signal to every subscriber that asked for it.
    ///
    /// Subscriptions whose receiver has been dropped are pruned here.
    pub fn dispatch(&self, signal: InputSignal) {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        subscriptions.retain(|s| !s.tx.is_closed());
        for subscription in subscriptions.iter() {
            if subscription.signals.contains(&signal) {
                let _ = subscription.tx.send(signal);
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        subscriptions.retain(|s| !s.tx.is_closed());
        subscriptions.len()
    }
}

impl TextField for InMemoryField {
    fn value(&self) -> String {
        self.value.load().as_ref().clone()
    }
}

impl SignalSource for InMemoryField {
    fn subscribe(&self, signals: &[InputSignal]) -> mpsc::UnboundedReceiver<InputSignal> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscriptions.lock().unwrap().push(Subscription {
            signals: signals.iter().copied().collect(),
            tx,
        });
        rx
    }
}
