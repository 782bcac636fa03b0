//! Sled 持久化后端

mod key_value_store;

pub use key_value_store::{SledKeyValueStore, SledStoreConfig};
