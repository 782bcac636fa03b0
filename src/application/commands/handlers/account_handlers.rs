//! Account Command Handlers

use std::sync::Arc;

use crate::application::commands::{DeleteUser, Signup, ToggleBookmark, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::store::LibraryStore;
use crate::domain::account::User;
use crate::domain::novel::NovelId;

/// 新用户默认赠送金币
pub const DEFAULT_SIGNUP_BONUS: u64 = 50;

// ============================================================================
// Signup
// ============================================================================

/// Signup Handler - 邮箱已存在时返回 AlreadyExists，且不修改用户集合
pub struct SignupHandler {
    store: Arc<LibraryStore>,
    signup_bonus: u64,
}

impl SignupHandler {
    pub fn new(store: Arc<LibraryStore>, signup_bonus: u64) -> Self {
        Self {
            store,
            signup_bonus,
        }
    }

    pub fn handle(&self, command: Signup) -> Result<User, ApplicationError> {
        let username = command.username.trim();
        let email = command.email.trim();
        if username.is_empty() {
            return Err(ApplicationError::validation("Username cannot be empty"));
        }
        if email.is_empty() {
            return Err(ApplicationError::validation("Email cannot be empty"));
        }

        let mut uow = self.store.begin()?;
        if uow.users()?.iter().any(|u| u.email.trim() == email) {
            return Err(ApplicationError::already_exists("User", email));
        }

        let user = User::new(username, email, self.signup_bonus);
        uow.users_mut()?.push(user.clone());
        uow.commit()?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            role = user.role.as_str(),
            coins = user.coins,
            "User signed up"
        );

        Ok(user)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler - 整条替换，不级联
pub struct UpdateUserHandler {
    store: Arc<LibraryStore>,
}

impl UpdateUserHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: UpdateUser) -> Result<(), ApplicationError> {
        let user = command.user;
        let user_id = user.id.clone();
        let mut uow = self.store.begin()?;

        let Some(slot) = uow.users_mut()?.iter_mut().find(|u| u.id == user_id) else {
            tracing::debug!(user_id = %user_id, "Update skipped, user not found");
            return Ok(());
        };

        *slot = user;
        uow.commit()?;

        tracing::info!(user_id = %user_id, "User updated");
        Ok(())
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler - 交易流水保留
pub struct DeleteUserHandler {
    store: Arc<LibraryStore>,
}

impl DeleteUserHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        let user_id = command.user_id;
        let mut uow = self.store.begin()?;

        let users = uow.users_mut()?;
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            tracing::debug!(user_id = %user_id, "Delete skipped, user not found");
            return Ok(());
        }
        uow.commit()?;

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}

// ============================================================================
// ToggleBookmark
// ============================================================================

/// ToggleBookmark Handler - 返回切换后的书签列表，用户不存在时返回空列表
pub struct ToggleBookmarkHandler {
    store: Arc<LibraryStore>,
}

impl ToggleBookmarkHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: ToggleBookmark) -> Result<Vec<NovelId>, ApplicationError> {
        let mut uow = self.store.begin()?;

        let Some(user) = uow.users_mut()?.iter_mut().find(|u| u.id == command.user_id) else {
            tracing::debug!(user_id = %command.user_id, "Bookmark toggle skipped, user not found");
            return Ok(Vec::new());
        };

        let bookmarks = user.toggle_bookmark(&command.novel_id).to_vec();
        let bookmarked = bookmarks.contains(&command.novel_id);
        uow.commit()?;

        tracing::info!(
            user_id = %command.user_id,
            novel_id = %command.novel_id,
            bookmarked = bookmarked,
            "Bookmark toggled"
        );

        Ok(bookmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::seeded_store;
    use crate::domain::account::UserId;

    fn signup(username: &str, email: &str) -> Signup {
        Signup {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_signup_creates_user_with_bonus() {
        let store = seeded_store();
        let handler = SignupHandler::new(store.clone(), DEFAULT_SIGNUP_BONUS);

        let user = handler.handle(signup("NewReader", "new@example.com")).unwrap();

        assert_eq!(user.coins, 50);
        assert!(user.bookmarks.is_empty());
        assert!(user.purchased_chapters.is_empty());
        assert!(!user.is_admin());
        assert_eq!(store.begin().unwrap().users().unwrap().len(), 3);
    }

    #[test]
    fn test_signup_duplicate_email_fails_without_mutation() {
        let store = seeded_store();
        let before = store.begin().unwrap().users().unwrap().to_vec();

        let result = SignupHandler::new(store.clone(), DEFAULT_SIGNUP_BONUS)
            .handle(signup("Impostor", "reader@novelverse.com"));

        assert!(matches!(
            result,
            Err(ApplicationError::AlreadyExists { resource_type: "User", .. })
        ));
        assert_eq!(store.begin().unwrap().users().unwrap(), before.as_slice());
    }

    #[test]
    fn test_signup_detects_duplicate_with_padded_stored_email() {
        let store = seeded_store();
        {
            let mut uow = store.begin().unwrap();
            let reader = uow
                .users_mut()
                .unwrap()
                .iter_mut()
                .find(|u| u.id == UserId::from("user1"))
                .unwrap();
            reader.email = "  reader@novelverse.com ".to_string();
            uow.commit().unwrap();
        }

        let result = SignupHandler::new(store.clone(), DEFAULT_SIGNUP_BONUS)
            .handle(signup("Impostor", " reader@novelverse.com"));

        assert!(matches!(result, Err(ApplicationError::AlreadyExists { .. })));
        assert_eq!(store.begin().unwrap().users().unwrap().len(), 2);
    }

    #[test]
    fn test_signup_requires_email() {
        let result = SignupHandler::new(seeded_store(), DEFAULT_SIGNUP_BONUS)
            .handle(signup("NoMail", "  "));
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[test]
    fn test_update_and_delete_user() {
        let store = seeded_store();
        let mut reader = store.begin().unwrap().users().unwrap()[1].clone();
        reader.coins = 500;

        UpdateUserHandler::new(store.clone())
            .handle(UpdateUser { user: reader })
            .unwrap();
        assert_eq!(store.begin().unwrap().users().unwrap()[1].coins, 500);

        DeleteUserHandler::new(store.clone())
            .handle(DeleteUser {
                user_id: UserId::from("user1"),
            })
            .unwrap();
        let mut uow = store.begin().unwrap();
        assert_eq!(uow.users().unwrap().len(), 1);
        assert_eq!(uow.novels().unwrap().len(), 3);
    }

    #[test]
    fn test_toggle_bookmark_is_involution() {
        let store = seeded_store();
        let handler = ToggleBookmarkHandler::new(store);
        let command = ToggleBookmark {
            user_id: UserId::from("user1"),
            novel_id: NovelId::from("3"),
        };

        let added = handler.handle(command.clone()).unwrap();
        assert_eq!(added, vec![NovelId::from("1"), NovelId::from("3")]);

        let restored = handler.handle(command).unwrap();
        assert_eq!(restored, vec![NovelId::from("1")]);
    }

    #[test]
    fn test_toggle_bookmark_missing_user_returns_empty() {
        let handler = ToggleBookmarkHandler::new(seeded_store());
        let bookmarks = handler
            .handle(ToggleBookmark {
                user_id: UserId::from("nobody"),
                novel_id: NovelId::from("1"),
            })
            .unwrap();
        assert!(bookmarks.is_empty());
    }
}
