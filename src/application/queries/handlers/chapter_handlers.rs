//! Chapter Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{CheckChapterAccess, GetChapter, ListChapters};
use crate::application::store::LibraryStore;
use crate::domain::novel::Chapter;

/// ListChapters Handler - 按 order 升序，order 相同时保持插入顺序
pub struct ListChaptersHandler {
    store: Arc<LibraryStore>,
}

impl ListChaptersHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: ListChapters) -> Result<Vec<Chapter>, ApplicationError> {
        let mut uow = self.store.begin()?;
        let mut chapters: Vec<Chapter> = uow
            .chapters()?
            .iter()
            .filter(|c| c.belongs_to(&query.novel_id))
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.order);
        Ok(chapters)
    }
}

/// GetChapter Handler
pub struct GetChapterHandler {
    store: Arc<LibraryStore>,
}

impl GetChapterHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetChapter) -> Result<Option<Chapter>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow
            .chapters()?
            .iter()
            .find(|c| c.id == query.chapter_id)
            .cloned())
    }
}

/// CheckChapterAccess Handler
///
/// 免费章节任何人可读；付费章节仅限管理员或已购买的用户。章节不存在时返回 false。
pub struct CheckChapterAccessHandler {
    store: Arc<LibraryStore>,
}

impl CheckChapterAccessHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: CheckChapterAccess) -> Result<bool, ApplicationError> {
        let mut uow = self.store.begin()?;

        let Some(chapter) = uow
            .chapters()?
            .iter()
            .find(|c| c.id == query.chapter_id)
            .cloned()
        else {
            return Ok(false);
        };

        if !chapter.is_paid {
            return Ok(true);
        }

        let Some(user_id) = query.user_id else {
            return Ok(false);
        };

        Ok(uow
            .users()?
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.can_read(&chapter))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::PurchaseChapterHandler;
    use crate::application::commands::PurchaseChapter;
    use crate::application::testing::seeded_store;
    use crate::domain::account::UserId;
    use crate::domain::novel::{ChapterId, NovelId};

    #[test]
    fn test_chapters_sorted_by_order_regardless_of_insertion() {
        let store = seeded_store();
        {
            let mut uow = store.begin().unwrap();
            let chapters = uow.chapters_mut().unwrap();
            chapters.reverse();
            chapters.push(Chapter::new(NovelId::from("1"), "Prologue", "", 0, false, 0));
            chapters.push(Chapter::new(NovelId::from("2"), "Other novel", "", -1, false, 0));
            uow.commit().unwrap();
        }

        let chapters = ListChaptersHandler::new(store)
            .handle(ListChapters {
                novel_id: NovelId::from("1"),
            })
            .unwrap();

        let orders: Vec<i64> = chapters.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_get_chapter() {
        let handler = GetChapterHandler::new(seeded_store());

        let chapter = handler
            .handle(GetChapter {
                chapter_id: ChapterId::from("c1-3"),
            })
            .unwrap()
            .unwrap();
        assert!(chapter.is_paid);
        assert_eq!(chapter.price, 15);

        assert!(handler
            .handle(GetChapter {
                chapter_id: ChapterId::from("nope"),
            })
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_chapter_access_rules() {
        let store = seeded_store();
        let handler = CheckChapterAccessHandler::new(store.clone());
        let check = |user: Option<&str>, chapter: &str| {
            handler
                .handle(CheckChapterAccess {
                    user_id: user.map(UserId::from),
                    chapter_id: ChapterId::from(chapter),
                })
                .unwrap()
        };

        assert!(check(None, "c1-1"));
        assert!(!check(None, "c1-3"));
        assert!(!check(Some("user1"), "c1-3"));
        assert!(check(Some("admin1"), "c1-3"));
        assert!(!check(Some("user1"), "missing"));

        PurchaseChapterHandler::new(store)
            .handle(PurchaseChapter {
                user_id: UserId::from("user1"),
                chapter_id: ChapterId::from("c1-3"),
            })
            .unwrap();
        assert!(check(Some("user1"), "c1-3"));
    }
}
