//! 测试辅助

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::ports::{KeyValueStorePort, StoreError, WriteBatch};
use crate::application::store::{LibraryStore, DEFAULT_KEY_PREFIX};
use crate::infrastructure::memory::InMemoryKeyValueStore;

/// 基于内存后端、已写入默认数据的存储
pub(crate) fn seeded_store() -> Arc<LibraryStore> {
    let store = LibraryStore::new(Arc::new(InMemoryKeyValueStore::new()), DEFAULT_KEY_PREFIX);
    store.init().unwrap();
    store.arc()
}

/// 直接写入单个键，绕过 `LibraryStore`
pub(crate) fn write_key(kv: &dyn KeyValueStorePort, key: &str, value: &str) {
    let mut batch = WriteBatch::new();
    batch.put(key, value);
    kv.apply_batch(batch).unwrap();
}

/// 记录每个批次写入的键，可按需让批量写入失败
#[derive(Default)]
pub(crate) struct RecordingKeyValueStore {
    inner: InMemoryKeyValueStore,
    batches: Mutex<Vec<Vec<String>>>,
    fail_batches: AtomicBool,
}

impl RecordingKeyValueStore {
    /// 已成功应用的批次（每个批次的键）
    pub(crate) fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    pub(crate) fn clear(&self) {
        self.batches.lock().unwrap().clear();
    }

    pub(crate) fn fail_batches(&self, fail: bool) {
        self.fail_batches.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStorePort for RecordingKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn apply_batch(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if self.fail_batches.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("batch rejected".to_string()));
        }
        let keys = batch.keys().map(str::to_string).collect();
        self.inner.apply_batch(batch)?;
        self.batches.lock().unwrap().push(keys);
        Ok(())
    }
}

/// 基于记录后端、已写入默认数据的存储（种子批次已清除）
pub(crate) fn recording_store() -> (Arc<RecordingKeyValueStore>, Arc<LibraryStore>) {
    let kv = Arc::new(RecordingKeyValueStore::default());
    let store = LibraryStore::new(kv.clone(), DEFAULT_KEY_PREFIX);
    store.init().unwrap();
    kv.clear();
    (kv, store.arc())
}
