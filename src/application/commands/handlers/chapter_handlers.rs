//! Chapter Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateChapter, DeleteChapter, UpdateChapter};
use crate::application::error::ApplicationError;
use crate::application::store::LibraryStore;
use crate::domain::novel::Chapter;

// ============================================================================
// CreateChapter
// ============================================================================

/// CreateChapter Handler - 追加章节并刷新所属小说的更新时间
pub struct CreateChapterHandler {
    store: Arc<LibraryStore>,
}

impl CreateChapterHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: CreateChapter) -> Result<Chapter, ApplicationError> {
        let chapter = Chapter::new(
            command.novel_id,
            command.title,
            command.content,
            command.order,
            command.is_paid,
            command.price,
        );

        let mut uow = self.store.begin()?;
        uow.chapters_mut()?.push(chapter.clone());

        // 所属小说不存在时只追加章节
        if let Some(novel) = uow
            .novels_mut()?
            .iter_mut()
            .find(|n| n.id == chapter.novel_id)
        {
            novel.touch();
        }
        uow.commit()?;

        tracing::info!(
            chapter_id = %chapter.id,
            novel_id = %chapter.novel_id,
            order = chapter.order,
            is_paid = chapter.is_paid,
            "Chapter created"
        );

        Ok(chapter)
    }
}

// ============================================================================
// UpdateChapter
// ============================================================================

/// UpdateChapter Handler
pub struct UpdateChapterHandler {
    store: Arc<LibraryStore>,
}

impl UpdateChapterHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: UpdateChapter) -> Result<(), ApplicationError> {
        let chapter = command.chapter;
        let chapter_id = chapter.id.clone();
        let mut uow = self.store.begin()?;

        let Some(slot) = uow.chapters_mut()?.iter_mut().find(|c| c.id == chapter_id) else {
            tracing::debug!(chapter_id = %chapter_id, "Update skipped, chapter not found");
            return Ok(());
        };

        *slot = chapter;
        uow.commit()?;

        tracing::info!(chapter_id = %chapter_id, "Chapter updated");
        Ok(())
    }
}

// ============================================================================
// DeleteChapter
// ============================================================================

/// DeleteChapter Handler - 不级联（已购记录保留）
pub struct DeleteChapterHandler {
    store: Arc<LibraryStore>,
}

impl DeleteChapterHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: DeleteChapter) -> Result<(), ApplicationError> {
        let chapter_id = command.chapter_id;
        let mut uow = self.store.begin()?;

        let chapters = uow.chapters_mut()?;
        let before = chapters.len();
        chapters.retain(|c| c.id != chapter_id);
        if chapters.len() == before {
            tracing::debug!(chapter_id = %chapter_id, "Delete skipped, chapter not found");
            return Ok(());
        }
        uow.commit()?;

        tracing::info!(chapter_id = %chapter_id, "Chapter deleted");
        Ok(())
    }
}
