//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod account_queries;
mod chapter_queries;
mod ledger_queries;
mod novel_queries;

pub mod handlers;

pub use account_queries::*;
pub use chapter_queries::*;
pub use ledger_queries::*;
pub use novel_queries::*;
