//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（novelverse.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageBackend, DEFAULT_STORAGE_PATH};
use crate::application::{DEFAULT_KEY_PREFIX, DEFAULT_SIGNUP_BONUS};
use crate::domain::DEFAULT_RELATED_LIMIT;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["novelverse", "novelverse.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `NOVELVERSE_STORAGE__BACKEND=memory`
/// - `NOVELVERSE_STORAGE__PATH=/data/novelverse.sled`
/// - `NOVELVERSE_ACCOUNTS__SIGNUP_BONUS_COINS=100`
/// - `NOVELVERSE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("storage.backend", "sled")?
        .set_default("storage.path", DEFAULT_STORAGE_PATH)?
        .set_default("storage.key_prefix", DEFAULT_KEY_PREFIX)?
        .set_default("accounts.signup_bonus_coins", DEFAULT_SIGNUP_BONUS as i64)?
        .set_default("catalog.related_limit", DEFAULT_RELATED_LIMIT as i64)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    builder = builder.add_source(
        Environment::with_prefix("NOVELVERSE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.storage.backend == StorageBackend::Sled && config.storage.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage path cannot be empty for the sled backend".to_string(),
        ));
    }

    if config.storage.key_prefix.is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage key prefix cannot be empty".to_string(),
        ));
    }

    if config.catalog.related_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Related novel limit must be positive".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Storage Backend: {:?}", config.storage.backend);
    if config.storage.backend == StorageBackend::Sled {
        tracing::info!("Storage Path: {}", config.storage.path);
    }
    tracing::info!("Key Prefix: {}", config.storage.key_prefix);
    tracing::info!("Signup Bonus: {} coins", config.accounts.signup_bonus_coins);
    tracing::info!("Related Limit: {}", config.catalog.related_limit);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
