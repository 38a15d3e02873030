pub mod accounts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use catalog::Catalog;
pub use config::GymunityConfig;
pub use error::{ConfigError, StoreError};
pub use models::{Product, ProductDraft};
pub use storage::{KeyValueStore, Storage};
