//! Novel Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateNovel, DeleteNovel, UpdateNovel};
use crate::application::error::ApplicationError;
use crate::application::store::LibraryStore;
use crate::domain::novel::Novel;

// ============================================================================
// CreateNovel
// ============================================================================

/// CreateNovel Handler
pub struct CreateNovelHandler {
    store: Arc<LibraryStore>,
}

impl CreateNovelHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: CreateNovel) -> Result<Novel, ApplicationError> {
        if command.title.trim().is_empty() {
            return Err(ApplicationError::validation("Novel title cannot be empty"));
        }

        let novel = Novel::new(
            command.title,
            command.author,
            command.description,
            command.cover_url,
            command.tags,
            command.status,
        );

        let mut uow = self.store.begin()?;
        uow.novels_mut()?.push(novel.clone());
        uow.commit()?;

        tracing::info!(
            novel_id = %novel.id,
            title = %novel.title,
            status = novel.status.as_str(),
            "Novel created"
        );

        Ok(novel)
    }
}

// ============================================================================
// UpdateNovel
// ============================================================================

/// UpdateNovel Handler - 替换同 id 记录并刷新更新时间，id 不存在时不做任何事
pub struct UpdateNovelHandler {
    store: Arc<LibraryStore>,
}

impl UpdateNovelHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: UpdateNovel) -> Result<(), ApplicationError> {
        let mut novel = command.novel;
        let mut uow = self.store.begin()?;

        let Some(slot) = uow.novels_mut()?.iter_mut().find(|n| n.id == novel.id) else {
            tracing::debug!(novel_id = %novel.id, "Update skipped, novel not found");
            return Ok(());
        };

        novel.touch();
        *slot = novel;
        let novel_id = slot.id.clone();
        uow.commit()?;

        tracing::info!(novel_id = %novel_id, "Novel updated");
        Ok(())
    }
}

// ============================================================================
// DeleteNovel
// ============================================================================

/// DeleteNovel Handler
///
/// 在同一批次内删除小说、其全部章节，并从每个用户的书签中移除该小说。
pub struct DeleteNovelHandler {
    store: Arc<LibraryStore>,
}

impl DeleteNovelHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: DeleteNovel) -> Result<(), ApplicationError> {
        let novel_id = command.novel_id;
        let mut uow = self.store.begin()?;

        let novels = uow.novels_mut()?;
        let before = novels.len();
        novels.retain(|n| n.id != novel_id);
        let novel_removed = novels.len() != before;

        let chapters = uow.chapters_mut()?;
        let before = chapters.len();
        chapters.retain(|c| !c.belongs_to(&novel_id));
        let chapters_removed = before - chapters.len();

        let bookmarks_removed = uow
            .users_mut()?
            .iter_mut()
            .map(|u| u.remove_bookmark(&novel_id))
            .filter(|removed| *removed)
            .count();

        uow.commit()?;

        tracing::info!(
            novel_id = %novel_id,
            novel_removed = novel_removed,
            chapters_removed = chapters_removed,
            bookmarks_removed = bookmarks_removed,
            "Novel deleted"
        );

        Ok(())
    }
}
