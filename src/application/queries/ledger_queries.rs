//! Ledger Queries

/// 列出交易流水查询（最新在前）
#[derive(Debug, Clone)]
pub struct ListTransactions;

/// 统计查询
#[derive(Debug, Clone)]
pub struct GetStats;
