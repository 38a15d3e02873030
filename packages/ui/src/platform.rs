//! Platform-specific storage and configuration.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop / Mobile** (native): one file per key under `<data_dir>/gymunity/`
//!   via [`store::FileStore`]

use store::{GymunityConfig, Storage};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate key-value storage.
pub fn make_storage() -> Storage<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Storage::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("gymunity");
        Storage::new(store::FileStore::new(base))
    }
}

/// Load the client configuration.
///
/// Native builds read `<config_dir>/gymunity/gymunity.toml` when present. The
/// web build has no config file and uses the defaults. Both honour
/// `GYMUNITY_API_BASE_URL`.
pub fn load_config() -> GymunityConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let config = GymunityConfig::default();

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let config = {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("gymunity")
            .join(GymunityConfig::filename());
        match GymunityConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                GymunityConfig::default()
            }
        }
    };

    let config = config.with_env_override();
    tracing::info!(base_url = %config.api.base_url, "client configured");
    config
}
