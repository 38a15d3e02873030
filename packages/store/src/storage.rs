//! # Storage: typed JSON access over an abstract key-value backend
//!
//! This module is the core of GymUnity's client-side persistence. [`Storage`]
//! reads and writes JSON values under string keys without caring where the
//! bytes end up. All access goes through the [`KeyValueStore`] trait, so the
//! same logic works against an in-memory map (tests), a directory of files
//! (native builds) or the browser's `localStorage` (web).
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous interface with three methods mirroring the browser storage
//! API: `get_item`, `set_item` and `remove_item`. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::file_store`] and, on wasm,
//! `crate::local_storage`).
//!
//! ## Failure policy
//!
//! Nothing in here returns an error to the caller:
//!
//! | Situation | Result |
//! |-----------|--------|
//! | key absent or empty | fallback value |
//! | stored JSON does not decode as `T` | fallback value (logged at `debug`) |
//! | backend unavailable | fallback value |
//! | write / remove fails | logged at `warn`, dropped |
//!
//! Pages must never crash because a persisted value was hand-edited or
//! written by an older build. There is no concurrency control: last writer
//! wins.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Raw string key-value backend.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// JSON-typed access to a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct Storage<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and decode `key`, returning `fallback` when it is absent or malformed.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "discarding malformed persisted value");
                fallback
            }
        }
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.read(key, T::default())
    }

    /// Encode `value` as JSON and store it under `key`.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write_raw(key, &json),
            Err(e) => tracing::warn!(key, error = %e, "failed to encode value for storage"),
        }
    }

    /// Read an unencoded string value. Empty strings count as absent.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        self.backend.get_item(key).filter(|raw| !raw.is_empty())
    }

    pub fn write_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set_item(key, value) {
            tracing::warn!(key, error = %e, "storage write dropped");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            tracing::warn!(key, error = %e, "storage remove dropped");
        }
    }
}
