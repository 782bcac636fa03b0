//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说聚合管理
//! - 章节实体（阅读顺序、付费标记、价格）

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::Novel;
pub use entities::Chapter;
pub use value_objects::{ChapterId, NovelId, NovelStatus};
