use dioxus::prelude::*;

use crate::icons::FaDumbbell;
use crate::Icon;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            class: "home",
            Icon { icon: FaDumbbell, width: 48, height: 48 }
            h1 { "GymUnity Platform" }
            p { class: "muted", "Train smarter, follow the fitness news that matters, and shop from GymUnity sellers." }
            div {
                class: "actions",
                Link { class: "button primary", to: "/login", "Log in" }
                Link { class: "button ghost", to: "/register", "Create account" }
            }
        }
    }
}
