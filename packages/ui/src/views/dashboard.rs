use dioxus::prelude::*;

use crate::components::PageHeader;
use crate::state::{use_app, use_services};

#[component]
pub fn DashboardView() -> Element {
    let app = use_app();
    let services = use_services();
    let name = app
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Dashboard", subtitle: "Welcome back, {name}." }
            div {
                class: "card",
                p { "You're signed in. This is a placeholder dashboard." }
                button {
                    class: "ghost",
                    onclick: move |_| app.logout(&services),
                    "Log out"
                }
            }
        }
    }
}
