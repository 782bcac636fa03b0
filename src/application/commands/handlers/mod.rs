//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod account_handlers;
mod chapter_handlers;
mod ledger_handlers;
mod novel_handlers;

pub use account_handlers::*;
pub use chapter_handlers::*;
pub use ledger_handlers::*;
pub use novel_handlers::*;
