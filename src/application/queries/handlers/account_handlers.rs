//! Account Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetUser, ListUsers, Login};
use crate::application::store::LibraryStore;
use crate::domain::account::User;

/// Login Handler - 身份已由外部校验，这里只按邮箱查找
pub struct LoginHandler {
    store: Arc<LibraryStore>,
}

impl LoginHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: Login) -> Result<Option<User>, ApplicationError> {
        let email = query.email.trim();
        let mut uow = self.store.begin()?;
        let user = uow.users()?.iter().find(|u| u.email.trim() == email).cloned();

        match &user {
            Some(user) => {
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "User logged in")
            }
            None => tracing::debug!(email = %email, "Login failed, unknown email"),
        }

        Ok(user)
    }
}

/// GetUser Handler
pub struct GetUserHandler {
    store: Arc<LibraryStore>,
}

impl GetUserHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetUser) -> Result<Option<User>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow.users()?.iter().find(|u| u.id == query.user_id).cloned())
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    store: Arc<LibraryStore>,
}

impl ListUsersHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        let mut uow = self.store.begin()?;
        Ok(uow.users()?.to_vec())
    }
}
