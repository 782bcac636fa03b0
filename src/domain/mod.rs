//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Novel Context: 小说与章节
//! - Account Context: 用户、书签、购买规则
//! - Ledger Context: 金币流水

pub mod account;
pub mod ledger;
pub mod novel;

// 共享的相关推荐策略
mod related;

pub use related::{related_novels, DEFAULT_RELATED_LIMIT};
