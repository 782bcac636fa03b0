//! Novel Commands

use crate::domain::novel::{Novel, NovelId, NovelStatus};

/// 创建小说命令（id、阅读量、评分、更新时间由系统生成）
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    pub tags: Vec<String>,
    pub status: NovelStatus,
}

/// 更新小说命令（整条记录替换）
#[derive(Debug, Clone)]
pub struct UpdateNovel {
    pub novel: Novel,
}

/// 删除小说命令（级联删除章节与书签）
#[derive(Debug, Clone)]
pub struct DeleteNovel {
    pub novel_id: NovelId,
}
