//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NovelId, NovelStatus};

/// Novel 聚合根
///
/// 不变量:
/// - id 在目录内唯一
/// - 任何编辑或新增章节都会刷新 `updated_at`
/// - 删除时级联删除章节并清理所有用户书签（由应用层在同一批次内完成）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    pub id: NovelId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    pub tags: Vec<String>,
    pub status: NovelStatus,
    pub views: u64,
    pub rating: f64,
    pub updated_at: DateTime<Utc>,
}

impl Novel {
    /// 创建新小说：生成 id，阅读量与评分归零
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        cover_url: impl Into<String>,
        tags: Vec<String>,
        status: NovelStatus,
    ) -> Self {
        Self {
            id: NovelId::new(),
            title: title.into(),
            author: author.into(),
            description: description.into(),
            cover_url: cover_url.into(),
            tags,
            status,
            views: 0,
            rating: 0.0,
            updated_at: Utc::now(),
        }
    }

    /// 刷新最后更新时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 是否与另一部小说共享至少一个标签
    pub fn shares_tag_with(&self, other: &Novel) -> bool {
        other.tags.iter().any(|t| self.has_tag(t))
    }
}
