//! Chapter Commands

use crate::domain::novel::{Chapter, ChapterId, NovelId};

/// 创建章节命令
#[derive(Debug, Clone)]
pub struct CreateChapter {
    pub novel_id: NovelId,
    pub title: String,
    pub content: String,
    pub order: i64,
    pub is_paid: bool,
    pub price: u64,
}

/// 更新章节命令
#[derive(Debug, Clone)]
pub struct UpdateChapter {
    pub chapter: Chapter,
}

/// 删除章节命令
#[derive(Debug, Clone)]
pub struct DeleteChapter {
    pub chapter_id: ChapterId,
}
