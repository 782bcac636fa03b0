//! Memory Layer - In-Memory State Management
//!
//! 非持久化的键值存储后端

mod key_value_store;

pub use key_value_store::InMemoryKeyValueStore;
