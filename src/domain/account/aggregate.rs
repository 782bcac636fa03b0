//! Account Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{Role, UserId};
use crate::domain::novel::{Chapter, ChapterId, NovelId};

/// 购买被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    UserNotFound,
    ChapterNotFound,
    InsufficientCoins { balance: u64, price: u64 },
}

/// 章节购买结果
///
/// `AlreadyOwned` 与 `Purchased` 都算成功，只有后者会扣费并记账。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// 首次购买成功，附带扣费后的余额
    Purchased { balance: u64 },
    /// 已拥有，状态不变
    AlreadyOwned,
    /// 拒绝，状态不变
    Denied(DenialReason),
}

impl PurchaseOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, PurchaseOutcome::Denied(_))
    }
}

/// User 聚合根
///
/// 不变量:
/// - `coins` 不会因购买变为负数
/// - `purchased_chapters` 只通过成功购买增长
/// - `bookmarks` 中不含重复的小说 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub coins: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// 书签（小说 id）
    pub bookmarks: Vec<NovelId>,
    /// 已购章节 id
    pub purchased_chapters: Vec<ChapterId>,
}

impl User {
    /// 注册新用户（普通角色，附带初始金币）
    pub fn new(username: impl Into<String>, email: impl Into<String>, coins: u64) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            email: email.into(),
            role: Role::User,
            coins,
            avatar: None,
            bookmarks: Vec::new(),
            purchased_chapters: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn owns(&self, chapter_id: &ChapterId) -> bool {
        self.purchased_chapters.contains(chapter_id)
    }

    pub fn has_bookmarked(&self, novel_id: &NovelId) -> bool {
        self.bookmarks.contains(novel_id)
    }

    /// 免费章节对所有人开放；付费章节需已购买或为管理员
    pub fn can_read(&self, chapter: &Chapter) -> bool {
        !chapter.is_paid || self.is_admin() || self.owns(&chapter.id)
    }

    /// 购买章节
    ///
    /// 已拥有时直接返回 `AlreadyOwned`（不检查余额）；余额不足时拒绝且不修改状态。
    pub fn purchase(&mut self, chapter: &Chapter) -> PurchaseOutcome {
        if self.owns(&chapter.id) {
            return PurchaseOutcome::AlreadyOwned;
        }
        if self.coins < chapter.price {
            return PurchaseOutcome::Denied(DenialReason::InsufficientCoins {
                balance: self.coins,
                price: chapter.price,
            });
        }

        self.coins -= chapter.price;
        self.purchased_chapters.push(chapter.id.clone());
        PurchaseOutcome::Purchased {
            balance: self.coins,
        }
    }

    /// 切换书签：不存在则追加，存在则移除
    pub fn toggle_bookmark(&mut self, novel_id: &NovelId) -> &[NovelId] {
        if self.has_bookmarked(novel_id) {
            self.bookmarks.retain(|id| id != novel_id);
        } else {
            self.bookmarks.push(novel_id.clone());
        }
        &self.bookmarks
    }

    /// 移除书签，返回是否有变化
    pub fn remove_bookmark(&mut self, novel_id: &NovelId) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|id| id != novel_id);
        self.bookmarks.len() != before
    }

    pub fn deposit(&mut self, amount: u64) -> u64 {
        self.coins = self.coins.saturating_add(amount);
        self.coins
    }
}
