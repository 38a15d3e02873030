//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key
//! as one file under a base directory. It is used by native builds so the
//! session and product catalogue survive restarts the way `localStorage`
//! does in a browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── access_token
//! ├── user
//! ├── gymunity_products
//! └── ai_chat_user_<id>
//! ```
//!
//! Key characters outside `[A-Za-z0-9_.-]` are replaced with `_` so a key
//! can never escape the base directory.
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/gymunity/` |
//! | Linux | `~/.local/share/gymunity/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\gymunity\` |

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        // Never let ".." or "." resolve to a parent directory.
        let name = name.trim_start_matches('.');
        self.base.join(if name.is_empty() { "_" } else { name })
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.base).map_err(io_err)?;
        std::fs::write(self.item_path(key), value).map_err(io_err)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::storage::Storage;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gymunity_test_{tag}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let storage = Storage::new(FileStore::new(dir.clone()));
        storage.write(
            "gymunity_products",
            &vec![Product {
                id: "p-1".to_string(),
                name: "Plan".to_string(),
                price: 29.0,
                image_url: None,
                seller_id: Some("7".to_string()),
            }],
        );

        // Re-open from same directory
        let reopened = Storage::new(FileStore::new(dir.clone()));
        let products: Vec<Product> = reopened.read("gymunity_products", Vec::new());
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Plan");
        assert_eq!(products[0].seller_id.as_deref(), Some("7"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = temp_dir("remove");
        let store = FileStore::new(dir.clone());
        assert!(store.remove_item("user").is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_stay_inside_base() {
        let store = FileStore::new(PathBuf::from("/tmp/gymunity"));
        assert_eq!(
            store.item_path("../etc/passwd"),
            PathBuf::from("/tmp/gymunity/_etc_passwd")
        );
        assert_eq!(
            store.item_path("ai_chat_user_12"),
            PathBuf::from("/tmp/gymunity/ai_chat_user_12")
        );
    }
}
