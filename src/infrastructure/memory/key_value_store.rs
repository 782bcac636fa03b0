//! In-Memory Key-Value Store Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{KeyValueStorePort, StoreError, WriteBatch};

/// 内存键值存储
///
/// 进程内的非持久化后端，用于测试和临时会话。批量写入逐键应用，
/// 原子性由 `LibraryStore` 的写锁保证。
pub struct InMemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorePort for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn apply_batch(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let count = batch.len();
        for (key, value) in batch.into_entries() {
            self.entries.insert(key, value);
        }
        tracing::trace!(entries = count, "Batch applied");
        Ok(())
    }
}
