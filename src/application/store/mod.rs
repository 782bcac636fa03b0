//! Content & Ledger Store
//!
//! 表现层与持久化状态之间的唯一通道。四个集合（小说、章节、用户、交易）
//! 各自序列化为一个 JSON 数组，存放在 `<prefix><collection>` 键下。
//!
//! 并发模型: 单写者
//! - 每个 `UnitOfWork` 持有 `write_lock`，读-改-写期间独占整个存储
//! - 被修改的集合在 `commit()` 时通过一个 `WriteBatch` 一起写回

mod seed;
mod unit_of_work;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::application::ports::{KeyValueStorePort, StoreError, WriteBatch};

pub use unit_of_work::UnitOfWork;

/// 默认键前缀
pub const DEFAULT_KEY_PREFIX: &str = "nv_";

/// 持久化集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Novels,
    Chapters,
    Users,
    Transactions,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Novels,
        Collection::Chapters,
        Collection::Users,
        Collection::Transactions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Novels => "novels",
            Collection::Chapters => "chapters",
            Collection::Users => "users",
            Collection::Transactions => "transactions",
        }
    }
}

/// 集合存储
pub struct LibraryStore {
    kv: Arc<dyn KeyValueStorePort>,
    key_prefix: String,
    /// 串行化所有读-改-写
    write_lock: Mutex<()>,
}

impl LibraryStore {
    pub fn new(kv: Arc<dyn KeyValueStorePort>, key_prefix: impl Into<String>) -> Self {
        Self {
            kv,
            key_prefix: key_prefix.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 集合对应的存储键
    pub fn key(&self, collection: Collection) -> String {
        format!("{}{}", self.key_prefix, collection.name())
    }

    /// 初始化：为缺失的集合写入默认数据
    ///
    /// 已存在的键保持不变，重复调用无副作用。
    pub fn init(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut batch = WriteBatch::new();
        for collection in Collection::ALL {
            let key = self.key(collection);
            if self.kv.get(&key)?.is_some() {
                continue;
            }

            let value = match collection {
                Collection::Novels => encode(&seed::novels())?,
                Collection::Chapters => encode(&seed::chapters())?,
                Collection::Users => encode(&seed::users())?,
                Collection::Transactions => "[]".to_string(),
            };
            tracing::debug!(key = %key, "Seeding collection");
            batch.put(key, value);
        }

        if batch.is_empty() {
            return Ok(());
        }

        let seeded = batch.len();
        self.kv.apply_batch(batch)?;
        tracing::info!(collections = seeded, "Store seeded with default dataset");
        Ok(())
    }

    /// 开始一个工作单元（获取写锁）
    pub fn begin(&self) -> Result<UnitOfWork<'_>, StoreError> {
        let guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(UnitOfWork::new(self, guard))
    }

    /// 刷盘
    pub fn flush(&self) -> Result<(), StoreError> {
        self.kv.flush()
    }

    /// 读取整个集合，缺失的键视为空数组
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        match self.kv.get(&self.key(collection))? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                StoreError::Serialization(format!("{}: {}", collection.name(), e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn apply(&self, batch: WriteBatch) -> Result<(), StoreError> {
        self.kv.apply_batch(batch)
    }
}

fn encode<T: Serialize>(items: &[T]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|e| StoreError::Serialization(e.to_string()))
}
