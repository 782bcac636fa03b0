//! Novel Queries

use crate::domain::novel::NovelId;

/// 列出所有小说查询
#[derive(Debug, Clone)]
pub struct ListNovels;

/// 获取小说详情查询
#[derive(Debug, Clone)]
pub struct GetNovel {
    pub novel_id: NovelId,
}

/// 相关推荐查询
#[derive(Debug, Clone)]
pub struct GetRelatedNovels {
    pub novel_id: NovelId,
    /// 为空时使用配置的默认数量
    pub limit: Option<usize>,
}
