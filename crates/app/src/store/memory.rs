//! In-memory key-value store.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::store::{KeyValueStore, StoreError};

/// Key-value store that lives for the duration of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.read().map_err(|_poisoned| StoreError::Poisoned)?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|_poisoned| StoreError::Poisoned)?;

        values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
