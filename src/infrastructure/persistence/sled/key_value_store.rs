//! Sled-based Key-Value Store Implementation

use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{KeyValueStorePort, StoreError, WriteBatch};
use crate::config::DEFAULT_STORAGE_PATH;

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}

/// Sled 键值存储
///
/// 值以 UTF-8 JSON 字符串保存；批量写入通过 `sled::Batch` 原子生效。
pub struct SledKeyValueStore {
    db: Db,
}

impl SledKeyValueStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path).map_err(|e| StoreError::Backend(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            keys = db.len(),
            "SledKeyValueStore initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl KeyValueStorePort for SledKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.db.get(key) {
            Ok(Some(data)) => {
                let value = String::from_utf8(data.to_vec())
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn apply_batch(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let count = batch.len();
        let mut sled_batch = sled::Batch::default();
        for (key, value) in batch.into_entries() {
            sled_batch.insert(key.as_bytes(), value.as_bytes());
        }

        self.db
            .apply_batch(sled_batch)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        tracing::debug!(entries = count, "Batch applied");
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }
}
