use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        header {
            class: "page-header",
            h1 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }
    }
}

/// Red banner for the last failure on a page.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "{message}" }
    }
}

/// Muted panel for loading and empty states.
#[component]
pub fn Notice(children: Element) -> Element {
    rsx! {
        div { class: "notice", {children} }
    }
}
