//! Ledger Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetStats, ListTransactions};
use crate::application::store::LibraryStore;
use crate::domain::ledger::{total_revenue, Transaction};

/// 后台统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    pub total_novels: usize,
    pub total_chapters: usize,
    pub total_users: usize,
    /// 购买类交易金额之和（不含充值）
    pub total_revenue: u64,
}

/// ListTransactions Handler
pub struct ListTransactionsHandler {
    store: Arc<LibraryStore>,
}

impl ListTransactionsHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: ListTransactions) -> Result<Vec<Transaction>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow.transactions()?.to_vec())
    }
}

/// GetStats Handler
pub struct GetStatsHandler {
    store: Arc<LibraryStore>,
}

impl GetStatsHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: GetStats) -> Result<LibraryStats, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(LibraryStats {
            total_novels: uow.novels()?.len(),
            total_chapters: uow.chapters()?.len(),
            total_users: uow.users()?.len(),
            total_revenue: total_revenue(uow.transactions()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::{DepositCoinsHandler, PurchaseChapterHandler};
    use crate::application::commands::{DepositCoins, PurchaseChapter};
    use crate::application::testing::seeded_store;
    use crate::domain::account::UserId;
    use crate::domain::novel::ChapterId;

    #[test]
    fn test_stats_on_seeded_store() {
        let stats = GetStatsHandler::new(seeded_store()).handle(GetStats).unwrap();
        assert_eq!(
            stats,
            LibraryStats {
                total_novels: 3,
                total_chapters: 3,
                total_users: 2,
                total_revenue: 0,
            }
        );
    }

    #[test]
    fn test_revenue_counts_only_purchases() {
        let store = seeded_store();
        DepositCoinsHandler::new(store.clone())
            .handle(DepositCoins {
                user_id: UserId::from("user1"),
                amount: 100,
            })
            .unwrap();
        PurchaseChapterHandler::new(store.clone())
            .handle(PurchaseChapter {
                user_id: UserId::from("user1"),
                chapter_id: ChapterId::from("c1-3"),
            })
            .unwrap();

        let stats = GetStatsHandler::new(store.clone()).handle(GetStats).unwrap();
        assert_eq!(stats.total_revenue, 15);

        let transactions = ListTransactionsHandler::new(store)
            .handle(ListTransactions)
            .unwrap();
        assert_eq!(transactions.len(), 2);
        assert!(transactions[0].is_purchase());
    }
}
