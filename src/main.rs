//! Novelverse - 启动入口
//!
//! 加载配置、初始化日志、打开存储后端并写入默认数据，输出后台统计后退出。

use std::sync::Arc;

use novelverse::application::{GetStats, KeyValueStorePort, LibraryStore};
use novelverse::config::{load_config, print_config, StorageBackend};
use novelverse::infrastructure::{AppState, InMemoryKeyValueStore, SledKeyValueStore, SledStoreConfig};

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},novelverse={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Novelverse - 网络小说阅读平台");
    print_config(&config);

    // 创建存储后端
    let kv: Arc<dyn KeyValueStorePort> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::Sled => {
            if let Some(parent) = std::path::Path::new(&config.storage.path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let sled_config = SledStoreConfig {
                db_path: config.storage.path.clone(),
            };
            Arc::new(SledKeyValueStore::new(&sled_config)?)
        }
    };

    // 初始化集合（首次启动写入默认数据）
    let store = LibraryStore::new(kv, config.storage.key_prefix.clone()).arc();
    store.init()?;

    let state = AppState::new(store.clone(), &config);

    let stats = state.get_stats_handler.handle(GetStats)?;
    tracing::info!(
        novels = stats.total_novels,
        chapters = stats.total_chapters,
        users = stats.total_users,
        revenue = stats.total_revenue,
        "Library ready"
    );

    store.flush()?;
    tracing::info!("Shutdown complete");

    Ok(())
}
