//! Persistence capability injected into the record store.

use crate::errors::AppResult;
use std::collections::HashMap;

/// Load/save of whole string blobs keyed by name.
///
/// Writes are synchronous and whole-value; there are no partial updates. The
/// store treats a failed save as best-effort (warned, not retried).
pub trait StorageAdapter {
    fn load(&self, key: &str) -> AppResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Map-backed adapter. Used by tests and anywhere a throwaway store is
/// useful; contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: HashMap<String, String>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded adapter, handy for simulating an existing store.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.entries.get(key)
    }
}

impl StorageAdapter for MemoryAdapter {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
