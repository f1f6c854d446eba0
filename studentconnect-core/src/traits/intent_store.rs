//! Page-scoped string store abstract Trait

use std::collections::HashMap;

use crate::error::CoreResult;

/// Page-scoped key/value string store.
///
/// Holds navigation intents across a reload. Frontends provide a persistent
/// implementation; `InMemoryIntentStore` is the default.
pub trait IntentStore: Send {
    /// Read a value
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;

    /// Delete a value (no-op when absent)
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

/// In-memory intent store
#[derive(Debug, Clone, Default)]
pub struct InMemoryIntentStore {
    values: HashMap<String, String>,
}

impl InMemoryIntentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl IntentStore for InMemoryIntentStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
