//! Persistence seam for settings values
//!
//! The engine never owns storage. Callers read current values into a
//! schema before rendering and write the validated map back after a
//! successful submit. Both calls are synchronous black boxes from the
//! engine's point of view.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashMap;

/// External store for settings values
pub trait SettingsStore: Send + Sync {
    /// Read the current value for a field, if one has been persisted
    fn read_current_value(&self, field_id: &str) -> anyhow::Result<Option<String>>;

    /// Persist the validated field_id -> value map
    fn write_validated_values(&self, values: &IndexMap<String, String>) -> anyhow::Result<()>;
}

/// In-process store backed by a `RwLock`, useful for tests and for hosts
/// without an external option store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted values
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the store holds no values
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn read_current_value(&self, field_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.read().get(field_id).cloned())
    }

    fn write_validated_values(&self, values: &IndexMap<String, String>) -> anyhow::Result<()> {
        let mut guard = self.values.write();
        for (field_id, value) in values {
            guard.insert(field_id.clone(), value.clone());
        }
        Ok(())
    }
}
