use api::Pager;
use dioxus::prelude::*;

/// "Page X of Y" with Previous / Next buttons. Reports the target page.
#[component]
pub fn PagerBar(pager: Pager, is_loading: bool, on_page: EventHandler<u32>) -> Element {
    let total_pages = pager.total_pages();
    let page = pager.page;

    rsx! {
        div {
            class: "pager",
            button {
                class: "ghost",
                disabled: is_loading || !pager.has_prev(),
                onclick: move |_| on_page.call(pager.prev()),
                "Previous"
            }
            span { class: "muted", "Page {page} of {total_pages}" }
            button {
                class: "ghost",
                disabled: is_loading || !pager.has_next(),
                onclick: move |_| on_page.call(pager.next()),
                "Next"
            }
        }
    }
}
