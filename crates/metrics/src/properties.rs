//! Ambient property context.
//!
//! Properties are key-value pairs attached to every batch delivered while
//! they are set. The map is snapshotted by value when a batch is handed
//! to the emitter, so a later mutation never alters the properties of an
//! already-delivered batch.

use std::collections::BTreeMap;

/// Property map delivered alongside each batch.
///
/// Iteration order is sorted by key; order carries no meaning, but every
/// delivered batch reproduces the full map.
pub type Properties = BTreeMap<String, String>;

/// Mutable mapping of ambient properties owned by one collector.
///
/// Mutation is only ever performed through [`set`](Self::set) and
/// [`remove`](Self::remove); the collector forces a flush before either,
/// so no single batch mixes points recorded under different property
/// sets.
#[derive(Debug, Default)]
pub struct PropertyContext {
    map: Properties,
}

impl PropertyContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a property. Overwrites silently if the key exists.
    pub fn set(&mut self, name: &str, value: &str) {
        self.map.insert(name.to_string(), value.to_string());
    }

    /// Remove a property. Returns `false` if the key was never set.
    pub fn remove(&mut self, name: &str) -> bool {
        self.map.remove(name).is_some()
    }

    /// Borrow the current map.
    pub fn current(&self) -> &Properties {
        &self.map
    }

    /// Owned copy of the current map.
    pub fn snapshot(&self) -> Properties {
        self.map.clone()
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
