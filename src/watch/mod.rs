//! Change detection and notification dispatch.
//!
//! [`ChangeWatcher`] binds to a single field, serializes every detection check
//! through one task, and fans each detected change out to local subscribers
//! and the remote notifier.

mod builder;
mod subscriber;
mod watcher;

pub use builder::ChangeWatcherBuilder;
pub use subscriber::{ChangeSubscribers, SubscriptionHandle};
pub use watcher::ChangeWatcher;
