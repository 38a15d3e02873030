use api::models::{NewsSource, NEWS_TOPICS};
use api::NewsFilters;
use dioxus::prelude::*;

/// Topic / source / text / date filters for the feed and explore pages.
///
/// Edits are reported through `on_change`; nothing is fetched until
/// `on_apply`.
#[component]
pub fn FiltersBar(
    value: NewsFilters,
    sources: Vec<NewsSource>,
    on_change: EventHandler<NewsFilters>,
    on_apply: EventHandler<()>,
    on_reset: EventHandler<()>,
    is_loading: bool,
) -> Element {
    let (v_topic, v_source, v_q, v_from) = (value.clone(), value.clone(), value.clone(), value.clone());
    let v_to = value.clone();

    rsx! {
        div {
            class: "card filters-bar",
            div {
                class: "filters-grid",
                label {
                    "Topic"
                    select {
                        value: "{value.topic}",
                        onchange: move |evt: FormEvent| {
                            on_change.call(NewsFilters { topic: evt.value(), ..v_topic.clone() })
                        },
                        option { value: "", "All topics" }
                        for topic in NEWS_TOPICS.iter() {
                            option { key: "{topic}", value: "{topic}", selected: value.topic == *topic, "{topic}" }
                        }
                    }
                }
                label {
                    "Source"
                    select {
                        value: "{value.source}",
                        onchange: move |evt: FormEvent| {
                            on_change.call(NewsFilters { source: evt.value(), ..v_source.clone() })
                        },
                        option { value: "", "All sources" }
                        for source in sources.iter() {
                            option {
                                key: "{source.id}",
                                value: "{source.id}",
                                selected: value.source == source.id.to_string(),
                                "{source.name}"
                            }
                        }
                    }
                }
                label {
                    "Search"
                    input {
                        placeholder: "Search title or summary",
                        value: "{value.q}",
                        oninput: move |evt: FormEvent| {
                            on_change.call(NewsFilters { q: evt.value(), ..v_q.clone() })
                        },
                    }
                }
                label {
                    "From"
                    input {
                        r#type: "date",
                        value: "{value.from}",
                        oninput: move |evt: FormEvent| {
                            on_change.call(NewsFilters { from: evt.value(), ..v_from.clone() })
                        },
                    }
                }
                label {
                    "To"
                    input {
                        r#type: "date",
                        value: "{value.to}",
                        oninput: move |evt: FormEvent| {
                            on_change.call(NewsFilters { to: evt.value(), ..v_to.clone() })
                        },
                    }
                }
            }
            div {
                class: "actions",
                button {
                    class: "primary",
                    disabled: is_loading,
                    onclick: move |_| on_apply.call(()),
                    "Apply filters"
                }
                button {
                    class: "ghost",
                    disabled: is_loading,
                    onclick: move |_| on_reset.call(()),
                    "Reset"
                }
            }
        }
    }
}
