//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。查找不到的实体不是错误，由 `Option` 表达。

use thiserror::Error;

use crate::application::ports::StoreError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源已存在（如重复邮箱注册）
    #[error("{resource_type} already exists: {key}")]
    AlreadyExists {
        resource_type: &'static str,
        key: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(#[from] StoreError),
}

impl ApplicationError {
    /// 创建 AlreadyExists 错误
    pub fn already_exists(resource_type: &'static str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            resource_type,
            key: key.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
