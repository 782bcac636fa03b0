//! Application State
//!
//! 一个显式构造的 `LibraryStore`，注入到所有 Command/Query Handlers。

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateChapterHandler, CreateNovelHandler, DeleteChapterHandler, DeleteNovelHandler,
    DeleteUserHandler, DepositCoinsHandler, PurchaseChapterHandler, SignupHandler,
    ToggleBookmarkHandler, UpdateChapterHandler, UpdateNovelHandler, UpdateUserHandler,
    // Query handlers
    CheckChapterAccessHandler, GetChapterHandler, GetNovelHandler, GetRelatedNovelsHandler,
    GetStatsHandler, GetUserHandler, ListChaptersHandler, ListNovelsHandler,
    ListTransactionsHandler, ListUsersHandler, LoginHandler,
    // Store
    LibraryStore,
};
use crate::config::AppConfig;

/// 应用状态
pub struct AppState {
    pub store: Arc<LibraryStore>,

    // ========== Command Handlers ==========
    pub create_novel_handler: CreateNovelHandler,
    pub update_novel_handler: UpdateNovelHandler,
    pub delete_novel_handler: DeleteNovelHandler,
    pub create_chapter_handler: CreateChapterHandler,
    pub update_chapter_handler: UpdateChapterHandler,
    pub delete_chapter_handler: DeleteChapterHandler,
    pub signup_handler: SignupHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,
    pub toggle_bookmark_handler: ToggleBookmarkHandler,
    pub purchase_chapter_handler: PurchaseChapterHandler,
    pub deposit_coins_handler: DepositCoinsHandler,

    // ========== Query Handlers ==========
    pub list_novels_handler: ListNovelsHandler,
    pub get_novel_handler: GetNovelHandler,
    pub get_related_novels_handler: GetRelatedNovelsHandler,
    pub list_chapters_handler: ListChaptersHandler,
    pub get_chapter_handler: GetChapterHandler,
    pub check_chapter_access_handler: CheckChapterAccessHandler,
    pub login_handler: LoginHandler,
    pub get_user_handler: GetUserHandler,
    pub list_users_handler: ListUsersHandler,
    pub list_transactions_handler: ListTransactionsHandler,
    pub get_stats_handler: GetStatsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<LibraryStore>, config: &AppConfig) -> Self {
        Self {
            store: store.clone(),

            // Command handlers
            create_novel_handler: CreateNovelHandler::new(store.clone()),
            update_novel_handler: UpdateNovelHandler::new(store.clone()),
            delete_novel_handler: DeleteNovelHandler::new(store.clone()),
            create_chapter_handler: CreateChapterHandler::new(store.clone()),
            update_chapter_handler: UpdateChapterHandler::new(store.clone()),
            delete_chapter_handler: DeleteChapterHandler::new(store.clone()),
            signup_handler: SignupHandler::new(store.clone(), config.accounts.signup_bonus_coins),
            update_user_handler: UpdateUserHandler::new(store.clone()),
            delete_user_handler: DeleteUserHandler::new(store.clone()),
            toggle_bookmark_handler: ToggleBookmarkHandler::new(store.clone()),
            purchase_chapter_handler: PurchaseChapterHandler::new(store.clone()),
            deposit_coins_handler: DepositCoinsHandler::new(store.clone()),

            // Query handlers
            list_novels_handler: ListNovelsHandler::new(store.clone()),
            get_novel_handler: GetNovelHandler::new(store.clone()),
            get_related_novels_handler: GetRelatedNovelsHandler::new(
                store.clone(),
                config.catalog.related_limit,
            ),
            list_chapters_handler: ListChaptersHandler::new(store.clone()),
            get_chapter_handler: GetChapterHandler::new(store.clone()),
            check_chapter_access_handler: CheckChapterAccessHandler::new(store.clone()),
            login_handler: LoginHandler::new(store.clone()),
            get_user_handler: GetUserHandler::new(store.clone()),
            list_users_handler: ListUsersHandler::new(store.clone()),
            list_transactions_handler: ListTransactionsHandler::new(store.clone()),
            get_stats_handler: GetStatsHandler::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        CreateChapter, DeleteNovel, GetStats, GetUser, ListChapters, ListTransactions, Login,
        PurchaseChapter, Signup, DEFAULT_KEY_PREFIX,
    };
    use crate::domain::account::{PurchaseOutcome, UserId};
    use crate::domain::ledger::TransactionKind;
    use crate::domain::novel::{ChapterId, NovelId};
    use crate::infrastructure::persistence::SledKeyValueStore;
    use tempfile::tempdir;

    fn open_state(path: &std::path::Path) -> AppState {
        let kv = SledKeyValueStore::open(path).unwrap().arc();
        let store = LibraryStore::new(kv, DEFAULT_KEY_PREFIX).arc();
        store.init().unwrap();
        AppState::new(store, &AppConfig::default())
    }

    #[test]
    fn test_purchase_scenario() {
        let dir = tempdir().unwrap();
        let state = open_state(&dir.path().join("library.sled"));
        let reader = UserId::from("user1");

        let paid = state
            .purchase_chapter_handler
            .handle(PurchaseChapter {
                user_id: reader.clone(),
                chapter_id: ChapterId::from("c1-3"),
            })
            .unwrap();
        assert_eq!(paid, PurchaseOutcome::Purchased { balance: 35 });

        let expensive = state
            .create_chapter_handler
            .handle(CreateChapter {
                novel_id: NovelId::from("1"),
                title: "Chapter 4: The Vault".to_string(),
                content: "<p>...</p>".to_string(),
                order: 4,
                is_paid: true,
                price: 9999,
            })
            .unwrap();
        let denied = state
            .purchase_chapter_handler
            .handle(PurchaseChapter {
                user_id: reader.clone(),
                chapter_id: expensive.id,
            })
            .unwrap();
        assert!(!denied.is_success());

        let user = state
            .get_user_handler
            .handle(GetUser { user_id: reader })
            .unwrap()
            .unwrap();
        assert_eq!(user.coins, 35);

        let transactions = state
            .list_transactions_handler
            .handle(ListTransactions)
            .unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 15);
        assert_eq!(transactions[0].kind, TransactionKind::Purchase);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.sled");

        {
            let state = open_state(&path);
            state
                .signup_handler
                .handle(Signup {
                    username: "Nightowl".to_string(),
                    email: "owl@example.com".to_string(),
                })
                .unwrap();
            state
                .delete_novel_handler
                .handle(DeleteNovel {
                    novel_id: NovelId::from("1"),
                })
                .unwrap();
            state.store.flush().unwrap();
        }

        let state = open_state(&path);
        let owl = state
            .login_handler
            .handle(Login {
                email: "owl@example.com".to_string(),
            })
            .unwrap();
        assert!(owl.is_some());

        let stats = state.get_stats_handler.handle(GetStats).unwrap();
        assert_eq!(stats.total_novels, 2);
        assert_eq!(stats.total_chapters, 0);
        assert_eq!(stats.total_users, 3);

        let chapters = state
            .list_chapters_handler
            .handle(ListChapters {
                novel_id: NovelId::from("1"),
            })
            .unwrap();
        assert!(chapters.is_empty());
    }
}
