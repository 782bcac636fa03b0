//! Chapter Queries

use crate::domain::account::UserId;
use crate::domain::novel::{ChapterId, NovelId};

/// 获取小说章节列表查询（按 order 升序）
#[derive(Debug, Clone)]
pub struct ListChapters {
    pub novel_id: NovelId,
}

/// 获取章节查询
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub chapter_id: ChapterId,
}

/// 章节阅读权限查询（未登录时 user_id 为空）
#[derive(Debug, Clone)]
pub struct CheckChapterAccess {
    pub user_id: Option<UserId>,
    pub chapter_id: ChapterId,
}
