//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod key_value_store;

pub use key_value_store::{KeyValueStorePort, StoreError, WriteBatch};
