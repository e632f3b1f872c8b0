//! Element resolution by markup id.

use crate::dom::WatchedField;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Resolve an element by its markup id.
///
/// This is the lookup capability a watcher is handed at bind time. An
/// implementation may be backed by a real page bridge or by an in-memory
/// registry; the watcher does not care which.
pub trait ElementLookup: Send + Sync {
    /// Find the field registered under `element_id`, if any.
    fn lookup(&self, element_id: &str) -> Option<Arc<dyn WatchedField>>;
}

/// In-memory element registry keyed by markup id.
///
/// # Examples
///
/// ```rust
/// use textwatch::dom::{ElementLookup, FieldRegistry, InMemoryField};
/// use std::sync::Arc;
///
/// let registry = FieldRegistry::new();
/// registry.register("quote", Arc::new(InMemoryField::new("hello")));
///
/// assert!(registry.lookup("quote").is_some());
/// assert!(registry.lookup("missing").is_none());
/// ```
pub struct FieldRegistry {
    fields: RwLock<HashMap<String, Arc<dyn WatchedField>>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(HashMap::new()),
        }
    }

    /// Register a field under an element id.
    ///
    /// Re-registering an id replaces the previous field; watchers already
    /// bound to the old field keep watching it.
    pub fn register<F>(&self, element_id: impl Into<String>, field: Arc<F>)
    where
        F: WatchedField + 'static,
    {
        self.fields.write().unwrap().insert(element_id.into(), field);
    }

    /// Remove a field, returning it if it was registered.
    pub fn remove(&self, element_id: &str) -> Option<Arc<dyn WatchedField>> {
        self.fields.write().unwrap().remove(element_id)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.read().unwrap().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.read().unwrap().is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementLookup for FieldRegistry {
    fn lookup(&self, element_id: &str) -> Option<Arc<dyn WatchedField>> {
        self.fields.read().unwrap().get(element_id).cloned()
    }
}
