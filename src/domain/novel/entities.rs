//! Novel Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChapterId, NovelId};

/// 章节
///
/// 不变量:
/// - `novel_id` 指向一部已存在的小说（软约束，仅靠级联删除维护）
/// - `order` 决定阅读顺序，唯一性由调用方保证
/// - 免费章节的 `price` 无意义，付费章节按 `price` 扣除金币
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub novel_id: NovelId,
    pub title: String,
    /// 富文本正文（HTML 或 Markdown）
    pub content: String,
    pub order: i64,
    pub is_paid: bool,
    pub price: u64,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(
        novel_id: NovelId,
        title: impl Into<String>,
        content: impl Into<String>,
        order: i64,
        is_paid: bool,
        price: u64,
    ) -> Self {
        Self {
            id: ChapterId::new(),
            novel_id,
            title: title.into(),
            content: content.into(),
            order,
            is_paid,
            price,
            created_at: Utc::now(),
        }
    }

    pub fn belongs_to(&self, novel_id: &NovelId) -> bool {
        &self.novel_id == novel_id
    }
}
