//! # textwatch
//!
//! Event-driven change detection for text fields with best-effort HTTP notification.
//!
//! ## Overview
//!
//! `textwatch` binds a watcher to a single text field, tracks the last value it
//! observed, and notifies a remote endpoint whenever the value changes:
//! - Event-driven detection over the usual interaction signals
//!   (`propertychange`, `keyup`, `input`, `paste`, `cut`)
//! - An optional polling fallback for changes that raise no signal at all
//!   (programmatic edits, some IME input)
//! - Fire-and-forget GET notification carrying the new value as the `tval`
//!   query parameter
//!
//! The host environment is injected rather than assumed: element lookup, value
//! access, and event subscription are narrow traits, so the watcher runs the
//! same against a real UI bridge or an in-memory test double.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textwatch::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> textwatch::error::Result<()> {
//! // The "page": a registry of fields keyed by element id
//! let registry = FieldRegistry::new();
//! let field = Arc::new(InMemoryField::new("initial"));
//! registry.register("quote", Arc::clone(&field));
//!
//! // Watch the field; notify /notify?tval=<new value> on every change
//! let watcher = ChangeWatcher::builder()
//!     .with_element_id("quote")
//!     .with_callback_url("/notify")
//!     .with_timer(true)
//!     .bind(&registry)?;
//!
//! // A user edit: store the value and raise the `input` signal
//! field.input("updated");
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivery semantics
//!
//! Notification is best-effort by design: the watcher spawns each delivery and
//! deliberately discards the outcome. Nothing retries, nothing blocks the
//! detection check, and a slow transport may deliver an earlier change after a
//! later one. Failures are logged at debug level and handed to an optional
//! error hook so the discard stays visible without becoming a guarantee.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! textwatch = { version = "0.1", features = ["http"] }
//! ```
//!
//! - `http` (default): GET delivery via `reqwest` ([`notify::HttpNotifier`])

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod dom;
pub mod error;
pub mod notify;
pub mod watch;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::dom::{FieldRegistry, InMemoryField, InputSignal, TextField};
    pub use crate::error::{Result, WatchError};
    pub use crate::watch::{ChangeWatcher, ChangeWatcherBuilder};
}
