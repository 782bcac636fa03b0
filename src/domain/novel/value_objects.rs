//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 小说唯一标识
///
/// 新建的小说使用 UUID v4 字符串；种子数据沿用简短的固定 id（如 `"1"`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NovelId(String);

impl NovelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NovelId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for NovelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NovelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NovelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 章节唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(String);

impl ChapterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChapterId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ChapterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 连载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NovelStatus {
    /// 连载中
    Ongoing,
    /// 已完结
    Completed,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "Ongoing",
            NovelStatus::Completed => "Completed",
        }
    }
}

impl Default for NovelStatus {
    fn default() -> Self {
        NovelStatus::Ongoing
    }
}
