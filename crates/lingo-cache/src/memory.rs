//! Process-local in-memory storage.

use crate::storage::Storage;
use dashmap::DashMap;
use lingo_common::MessageMap;
use tracing::debug;

/// In-memory [`Storage`] backed by a concurrent map.
///
/// Entries live for the lifetime of the process; there is no eviction.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: DashMap<String, MessageMap>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every cached entry.
    pub fn flush(&self) {
        self.items.clear();
        debug!("Flushed in-memory storage");
    }
}

impl Storage for MemoryStorage {
    fn has(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    fn get_item(&self, key: &str) -> Option<MessageMap> {
        self.items.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: MessageMap) {
        debug!("Caching {} messages under key: {}", value.len(), key);
        self.items.insert(key.to_string(), value);
    }
}
