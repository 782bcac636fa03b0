//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetNovel, GetRelatedNovels, ListNovels};
use crate::application::store::LibraryStore;
use crate::domain::novel::Novel;
use crate::domain::related_novels;

/// ListNovels Handler - 目录顺序
pub struct ListNovelsHandler {
    store: Arc<LibraryStore>,
}

impl ListNovelsHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: ListNovels) -> Result<Vec<Novel>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow.novels()?.to_vec())
    }
}

/// GetNovel Handler
pub struct GetNovelHandler {
    store: Arc<LibraryStore>,
}

impl GetNovelHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetNovel) -> Result<Option<Novel>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow.novels()?.iter().find(|n| n.id == query.novel_id).cloned())
    }
}

/// GetRelatedNovels Handler
pub struct GetRelatedNovelsHandler {
    store: Arc<LibraryStore>,
    default_limit: usize,
}

impl GetRelatedNovelsHandler {
    pub fn new(store: Arc<LibraryStore>, default_limit: usize) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    pub fn handle(&self, query: GetRelatedNovels) -> Result<Vec<Novel>, ApplicationError> {
        let limit = query.limit.unwrap_or(self.default_limit);
        let mut uow = self.store.begin()?;
        let catalog = uow.novels()?;

        let Some(target) = catalog.iter().find(|n| n.id == query.novel_id) else {
            return Ok(Vec::new());
        };

        Ok(related_novels(target, catalog, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}
