//! Injected host capabilities: field value access, interaction signals, and
//! element lookup.
//!
//! The watcher never talks to a concrete UI library. It depends on two narrow
//! capabilities — resolve an element by id, and subscribe to a field's
//! interaction signals — and an implementation is injected at bind time. The
//! in-memory types here are the provided implementation, equally usable as a
//! production field store or as a test double.

mod events;
mod field;
mod registry;

pub use events::InputSignal;
pub use field::{InMemoryField, SignalSource, TextField, WatchedField};
pub use registry::{ElementLookup, FieldRegistry};
