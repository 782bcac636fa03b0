//! Unit of Work
//!
//! 按需加载集合快照，记录被修改的集合，`commit()` 时一次性批量写回。
//! 未提交即丢弃时，所有修改作废。

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::MutexGuard;

use super::{encode, Collection, LibraryStore};
use crate::application::ports::{StoreError, WriteBatch};
use crate::domain::account::User;
use crate::domain::ledger::Transaction;
use crate::domain::novel::{Chapter, Novel};

/// 单个集合的快照
struct Slot<T> {
    collection: Collection,
    items: Option<Vec<T>>,
    dirty: bool,
}

impl<T: Serialize + DeserializeOwned> Slot<T> {
    fn new(collection: Collection) -> Self {
        Self {
            collection,
            items: None,
            dirty: false,
        }
    }

    fn load(&mut self, store: &LibraryStore) -> Result<&mut Vec<T>, StoreError> {
        if self.items.is_none() {
            self.items = Some(store.load(self.collection)?);
        }
        Ok(self.items.get_or_insert_with(Vec::new))
    }

    fn load_mut(&mut self, store: &LibraryStore) -> Result<&mut Vec<T>, StoreError> {
        self.dirty = true;
        self.load(store)
    }

    fn stage(&self, store: &LibraryStore, batch: &mut WriteBatch) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(items) = &self.items {
            batch.put(store.key(self.collection), encode(items)?);
        }
        Ok(())
    }
}

/// 工作单元
///
/// 持有存储写锁，生命周期内其他工作单元阻塞等待。
pub struct UnitOfWork<'a> {
    store: &'a LibraryStore,
    _guard: MutexGuard<'a, ()>,
    novels: Slot<Novel>,
    chapters: Slot<Chapter>,
    users: Slot<User>,
    transactions: Slot<Transaction>,
}

impl<'a> UnitOfWork<'a> {
    pub(super) fn new(store: &'a LibraryStore, guard: MutexGuard<'a, ()>) -> Self {
        Self {
            store,
            _guard: guard,
            novels: Slot::new(Collection::Novels),
            chapters: Slot::new(Collection::Chapters),
            users: Slot::new(Collection::Users),
            transactions: Slot::new(Collection::Transactions),
        }
    }

    pub fn novels(&mut self) -> Result<&[Novel], StoreError> {
        self.novels.load(self.store).map(|items| items.as_slice())
    }

    pub fn novels_mut(&mut self) -> Result<&mut Vec<Novel>, StoreError> {
        self.novels.load_mut(self.store)
    }

    pub fn chapters(&mut self) -> Result<&[Chapter], StoreError> {
        self.chapters.load(self.store).map(|items| items.as_slice())
    }

    pub fn chapters_mut(&mut self) -> Result<&mut Vec<Chapter>, StoreError> {
        self.chapters.load_mut(self.store)
    }

    pub fn users(&mut self) -> Result<&[User], StoreError> {
        self.users.load(self.store).map(|items| items.as_slice())
    }

    pub fn users_mut(&mut self) -> Result<&mut Vec<User>, StoreError> {
        self.users.load_mut(self.store)
    }

    /// 交易按时间倒序存放（最新在前）
    pub fn transactions(&mut self) -> Result<&[Transaction], StoreError> {
        self.transactions.load(self.store).map(|items| items.as_slice())
    }

    /// 追加一条交易到流水最前
    pub fn record_transaction(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        self.transactions
            .load_mut(self.store)?
            .insert(0, transaction);
        Ok(())
    }

    /// 提交：所有被修改的集合在同一批次内写回
    pub fn commit(self) -> Result<(), StoreError> {
        let mut batch = WriteBatch::new();
        self.novels.stage(self.store, &mut batch)?;
        self.chapters.stage(self.store, &mut batch)?;
        self.users.stage(self.store, &mut batch)?;
        self.transactions.stage(self.store, &mut batch)?;

        if batch.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            keys = ?batch.keys().collect::<Vec<_>>(),
            "Committing unit of work"
        );
        self.store.apply(batch)
    }
}
