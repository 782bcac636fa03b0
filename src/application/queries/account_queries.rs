//! Account Queries

use crate::domain::account::UserId;

/// 登录查询（按邮箱查找，不校验凭据）
#[derive(Debug, Clone)]
pub struct Login {
    pub email: String,
}

/// 获取用户查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}

/// 列出所有用户查询
#[derive(Debug, Clone)]
pub struct ListUsers;
