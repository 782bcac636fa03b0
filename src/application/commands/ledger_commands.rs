//! Ledger Commands

use crate::domain::account::UserId;
use crate::domain::novel::ChapterId;

/// 购买章节命令
#[derive(Debug, Clone)]
pub struct PurchaseChapter {
    pub user_id: UserId,
    pub chapter_id: ChapterId,
}

/// 充值命令
#[derive(Debug, Clone)]
pub struct DepositCoins {
    pub user_id: UserId,
    pub amount: u64,
}
