use dioxus::prelude::*;

use crate::icons::{FaDumbbell, FaNewspaper, FaRightFromBracket, FaRobot, FaStore};
use crate::state::{use_app, use_services};
use crate::Icon;

/// Top navigation. Shows the signed-in user's name and a logout button, or
/// login / apply links for visitors.
#[component]
pub fn Navbar() -> Element {
    let app = use_app();
    let services = use_services();
    let user = app.current_user.read().clone();

    rsx! {
        nav {
            class: "navbar",
            Link {
                class: "navbar__brand",
                to: "/",
                Icon { icon: FaDumbbell, width: 18, height: 18 }
                " GymUnity"
            }
            div {
                class: "navbar__links",
                Link {
                    to: "/ai-coach",
                    Icon { icon: FaRobot, width: 14, height: 14 }
                    " AI Coach"
                }
                Link {
                    to: "/news",
                    Icon { icon: FaNewspaper, width: 14, height: 14 }
                    " News"
                }
                Link {
                    to: "/store",
                    Icon { icon: FaStore, width: 14, height: 14 }
                    " Store"
                }
                if user.as_ref().is_some_and(|u| u.role.is_seller()) {
                    Link { to: "/seller", "Seller dashboard" }
                }
                if user.as_ref().is_some_and(|u| u.role.is_admin()) {
                    Link { to: "/admin/news", "News admin" }
                }
            }
            div {
                class: "navbar__session",
                match user {
                    Some(user) => {
                        let name = if user.name.trim().is_empty() { "there".to_string() } else { user.name.clone() };
                        rsx! {
                            span { class: "muted", "Hi, {name}" }
                            button {
                                class: "ghost",
                                onclick: move |_| app.logout(&services),
                                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                " Log out"
                            }
                        }
                    }
                    None => rsx! {
                        Link { class: "ghost", to: "/login", "Log in" }
                        Link { class: "button primary", to: "/register", "Apply now" }
                    },
                }
            }
        }
    }
}
