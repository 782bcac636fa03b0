//! Ledger Context - 金币流水
//!
//! 只追加的交易记录：每次首次购买章节或充值各写入一条，之后不再修改。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::UserId;

/// 交易唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 交易类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// 充值
    Deposit,
    /// 购买章节
    Purchase,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Purchase => "purchase",
        }
    }
}

/// 交易记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: UserId,
        amount: u64,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            amount,
            kind,
            description: description.into(),
            date: Utc::now(),
        }
    }

    pub fn purchase(user_id: UserId, amount: u64, chapter_title: &str) -> Self {
        Self::new(
            user_id,
            amount,
            TransactionKind::Purchase,
            format!("Purchased {}", chapter_title),
        )
    }

    pub fn deposit(user_id: UserId, amount: u64) -> Self {
        Self::new(
            user_id,
            amount,
            TransactionKind::Deposit,
            format!("Deposited {} coins", amount),
        )
    }

    pub fn is_purchase(&self) -> bool {
        self.kind == TransactionKind::Purchase
    }
}

/// 总收入：所有购买类交易金额之和
pub fn total_revenue(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .filter(|t| t.is_purchase())
        .map(|t| t.amount)
        .sum()
}
