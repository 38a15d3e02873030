//! # Browser `localStorage` backend
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Every call looks up `window.localStorage` afresh; the handle is cheap to
//! obtain and this keeps the store a zero-size `Clone + Copy` value that can
//! live inside Dioxus context.
//!
//! When there is no window (web workers, SSR) or storage is disabled by the
//! browser, reads return `None` and writes report [`StoreError::Unavailable`],
//! which [`crate::Storage`] turns into fallbacks and log lines.

use crate::error::StoreError;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}
