//! Atomic publication of refreshed registries.
//!
//! Registries are immutable, so concurrent readers only need one swap point:
//! whoever fetches/rebuilds publishes a whole new snapshot here and readers
//! pick it up on their next `load`. Nobody ever observes a half-built
//! registry.

use std::sync::{Arc, RwLock};

use crate::registry::ModelRegistry;

/// Shared handle to the current registry snapshot.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Option<Arc<ModelRegistry>>>,
}

impl SharedRegistry {
    /// Empty handle; `load` returns `None` until the first publish.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle pre-seeded with a registry (e.g. a fallback dataset).
    pub fn with_registry(registry: ModelRegistry) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(registry))),
        }
    }

    /// Swap in a new snapshot wholesale. Returns the previous one, if any.
    pub fn publish(&self, registry: ModelRegistry) -> Option<Arc<ModelRegistry>> {
        let next = Arc::new(registry);
        match self.current.write() {
            Ok(mut current) => current.replace(next),
            // A poisoned lock still holds valid data; recover and swap.
            Err(poisoned) => poisoned.into_inner().replace(next),
        }
    }

    /// Current snapshot, or `None` before the first publish.
    pub fn load(&self) -> Option<Arc<ModelRegistry>> {
        match self.current.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drop the current snapshot. Existing `Arc`s held by readers stay valid.
    pub fn clear(&self) {
        match self.current.write() {
            Ok(mut current) => *current = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
