//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（KeyValueStore）
//! - store: Content & Ledger Store（集合快照、工作单元、默认数据）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    // Novel commands
    CreateNovel,
    DeleteNovel,
    UpdateNovel,
    // Chapter commands
    CreateChapter,
    DeleteChapter,
    UpdateChapter,
    // Account commands
    DeleteUser,
    Signup,
    ToggleBookmark,
    UpdateUser,
    // Ledger commands
    DepositCoins,
    PurchaseChapter,
    // Handlers
    handlers::{
        CreateChapterHandler, CreateNovelHandler, DeleteChapterHandler, DeleteNovelHandler,
        DeleteUserHandler, DepositCoinsHandler, PurchaseChapterHandler, SignupHandler,
        ToggleBookmarkHandler, UpdateChapterHandler, UpdateNovelHandler, UpdateUserHandler,
        DEFAULT_SIGNUP_BONUS,
    },
};

pub use error::ApplicationError;

pub use ports::{KeyValueStorePort, StoreError, WriteBatch};

pub use queries::{
    // Novel queries
    GetNovel,
    GetRelatedNovels,
    ListNovels,
    // Chapter queries
    CheckChapterAccess,
    GetChapter,
    ListChapters,
    // Account queries
    GetUser,
    ListUsers,
    Login,
    // Ledger queries
    GetStats,
    ListTransactions,
    // Handlers
    handlers::{
        CheckChapterAccessHandler, GetChapterHandler, GetNovelHandler, GetRelatedNovelsHandler,
        GetStatsHandler, GetUserHandler, LibraryStats, ListChaptersHandler, ListNovelsHandler,
        ListTransactionsHandler, ListUsersHandler, LoginHandler,
    },
};

pub use store::{Collection, LibraryStore, UnitOfWork, DEFAULT_KEY_PREFIX};
