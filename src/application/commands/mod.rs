//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod account_commands;
mod chapter_commands;
mod ledger_commands;
mod novel_commands;

pub mod handlers;

pub use account_commands::*;
pub use chapter_commands::*;
pub use ledger_commands::*;
pub use novel_commands::*;
