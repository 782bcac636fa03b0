//! Key-Value Store Port - 出站端口
//!
//! 集合持久化的抽象：每个集合以一个 JSON 数组字符串存放在固定键下。
//! 具体实现在 infrastructure 层（内存、Sled）。

use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// 批量写入
///
/// 批次内所有写入一起生效，用于跨集合的级联修改。
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    entries: Vec<(String, String)>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// 批次内的键，按写入顺序
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }
}

/// Key-Value Store Port
pub trait KeyValueStorePort: Send + Sync {
    /// 读取键，不存在时返回 None
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 原子地应用一批写入
    fn apply_batch(&self, batch: WriteBatch) -> Result<(), StoreError>;

    /// 刷盘
    fn flush(&self) -> Result<(), StoreError> {
        // 默认实现：无持久化需求
        Ok(())
    }
}
