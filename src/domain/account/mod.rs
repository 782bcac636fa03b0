//! Account Context - 用户账户上下文
//!
//! 职责:
//! - 用户聚合（角色、金币余额）
//! - 书签与已购章节
//! - 购买规则与阅读权限

mod aggregate;
mod value_objects;

pub use aggregate::{DenialReason, PurchaseOutcome, User};
pub use value_objects::{Role, UserId};
