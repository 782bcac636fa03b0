//! Account Commands

use crate::domain::account::{User, UserId};
use crate::domain::novel::NovelId;

/// 注册命令
#[derive(Debug, Clone)]
pub struct Signup {
    pub username: String,
    pub email: String,
}

/// 更新用户命令（管理员编辑）
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user: User,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: UserId,
}

/// 切换书签命令
#[derive(Debug, Clone)]
pub struct ToggleBookmark {
    pub user_id: UserId,
    pub novel_id: NovelId,
}
