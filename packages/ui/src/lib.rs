//! Shared UI for the GymUnity web client: application state, route gates,
//! components, and page views.

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{load_config, make_storage, PlatformStore};

mod state;
pub use state::{use_app, use_services, AppProvider, AppState, Services};

mod gate;
pub use gate::{AdminGate, MemberGate, SellerGate};

mod navbar;
pub use navbar::Navbar;
