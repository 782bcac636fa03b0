//! Novelverse - 网络小说阅读平台数据层
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说与章节
//! - Account Context: 用户、书签、购买规则
//! - Ledger Context: 金币流水
//!
//! 应用层 (application/):
//! - Ports: KeyValueStorePort
//! - Store: Content & Ledger Store（工作单元、默认数据）
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 内存键值存储
//! - Persistence: Sled 键值存储
//! - State: 注入同一个 store 的全部处理器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
