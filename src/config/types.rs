//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::{DEFAULT_KEY_PREFIX, DEFAULT_SIGNUP_BONUS};
use crate::domain::DEFAULT_RELATED_LIMIT;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 账户配置
    #[serde(default)]
    pub accounts: AccountsConfig,

    /// 目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 进程内存，重启即丢失
    Memory,
    /// Sled 嵌入式数据库
    Sled,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Sled
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Sled 数据库路径
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// 集合键前缀
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

/// 默认 Sled 数据库路径
pub const DEFAULT_STORAGE_PATH: &str = "data/novelverse.sled";

fn default_storage_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// 账户配置
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    /// 注册赠送金币
    #[serde(default = "default_signup_bonus")]
    pub signup_bonus_coins: u64,
}

fn default_signup_bonus() -> u64 {
    DEFAULT_SIGNUP_BONUS
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            signup_bonus_coins: default_signup_bonus(),
        }
    }
}

/// 目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// 相关推荐数量
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::Sled);
        assert_eq!(config.storage.path, "data/novelverse.sled");
        assert_eq!(config.storage.key_prefix, "nv_");
        assert_eq!(config.accounts.signup_bonus_coins, 50);
        assert_eq!(config.catalog.related_limit, 4);
        assert_eq!(config.log.level, "info");
    }
}
