//! Admin list of RSS sources with inline create and edit forms.

use api::models::{NewsSource, NewsSourcePayload, NewsSourceUpdate};
use dioxus::prelude::*;

/// Raw text of a source form before validation.
#[derive(Clone, Debug, PartialEq)]
struct SourceForm {
    name: String,
    rss_url: String,
    category: String,
    tags: String,
    enabled: bool,
}

impl Default for SourceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            rss_url: String::new(),
            category: String::new(),
            tags: String::new(),
            enabled: true,
        }
    }
}

impl SourceForm {
    fn from_source(source: &NewsSource) -> Self {
        Self {
            name: source.name.clone(),
            rss_url: source.rss_url.clone(),
            category: source.category.clone().unwrap_or_default(),
            tags: source.tags.join(", "),
            enabled: source.enabled,
        }
    }

    fn payload(&self) -> Option<NewsSourcePayload> {
        NewsSourcePayload::from_form(&self.name, &self.rss_url, &self.category, &self.tags, self.enabled)
    }
}

#[component]
pub fn SourcesTable(
    sources: Vec<NewsSource>,
    is_loading: bool,
    on_create: EventHandler<NewsSourcePayload>,
    on_update: EventHandler<(i64, NewsSourceUpdate)>,
    on_toggle: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let mut form = use_signal(SourceForm::default);
    let mut editing = use_signal(|| None::<i64>);
    let mut edit_form = use_signal(SourceForm::default);

    let create = move |_: MouseEvent| {
        // Name and URL are required; an incomplete form is left as is.
        let payload = form.read().payload();
        if let Some(payload) = payload {
            on_create.call(payload);
            form.set(SourceForm::default());
        }
    };

    let save_edit = move |_: MouseEvent| {
        let Some(id) = editing() else { return };
        let payload = edit_form.read().payload();
        if let Some(payload) = payload {
            on_update.call((id, payload.into()));
            editing.set(None);
        }
    };

    rsx! {
        section {
            class: "card sources-table",
            h2 { "News Sources" }
            p { class: "muted small", "Manage RSS sources and availability." }
            div {
                class: "form-grid",
                input {
                    placeholder: "Source name",
                    value: "{form.read().name}",
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                input {
                    placeholder: "RSS URL",
                    value: "{form.read().rss_url}",
                    oninput: move |evt: FormEvent| form.write().rss_url = evt.value(),
                }
                input {
                    placeholder: "Category",
                    value: "{form.read().category}",
                    oninput: move |evt: FormEvent| form.write().category = evt.value(),
                }
                input {
                    placeholder: "Tags (comma separated)",
                    value: "{form.read().tags}",
                    oninput: move |evt: FormEvent| form.write().tags = evt.value(),
                }
            }
            div {
                class: "actions",
                button { class: "primary", disabled: is_loading, onclick: create, "Add source" }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: form.read().enabled,
                        onchange: move |evt: FormEvent| form.write().enabled = evt.checked(),
                    }
                    "Enabled"
                }
            }
            div {
                class: "sources-list",
                for source in sources.iter().cloned() {
                    div {
                        key: "{source.id}",
                        class: "source-row",
                        if editing() == Some(source.id) {
                            div {
                                class: "form-grid",
                                input {
                                    value: "{edit_form.read().name}",
                                    oninput: move |evt: FormEvent| edit_form.write().name = evt.value(),
                                }
                                input {
                                    value: "{edit_form.read().rss_url}",
                                    oninput: move |evt: FormEvent| edit_form.write().rss_url = evt.value(),
                                }
                                input {
                                    value: "{edit_form.read().category}",
                                    oninput: move |evt: FormEvent| edit_form.write().category = evt.value(),
                                }
                                input {
                                    value: "{edit_form.read().tags}",
                                    oninput: move |evt: FormEvent| edit_form.write().tags = evt.value(),
                                }
                                div {
                                    class: "actions",
                                    button { class: "ghost", onclick: save_edit, "Save" }
                                    button { class: "ghost", onclick: move |_| editing.set(None), "Cancel" }
                                }
                            }
                        } else {
                            SourceSummary { source: source.clone() }
                            div {
                                class: "actions",
                                button {
                                    class: "ghost",
                                    onclick: {
                                        let source = source.clone();
                                        move |_| {
                                            edit_form.set(SourceForm::from_source(&source));
                                            editing.set(Some(source.id));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "ghost",
                                    onclick: move |_| on_toggle.call(source.id),
                                    if source.enabled { "Disable" } else { "Enable" }
                                }
                                button {
                                    class: "ghost danger",
                                    onclick: move |_| on_delete.call(source.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
                if sources.is_empty() {
                    div { class: "muted", "No sources yet. Add one above." }
                }
            }
        }
    }
}

#[component]
fn SourceSummary(source: NewsSource) -> Element {
    let category = source.category.clone().unwrap_or_else(|| "uncategorized".to_string());
    let tags = if source.tags.is_empty() {
        "no tags".to_string()
    } else {
        source.tags.join(", ")
    };

    rsx! {
        div {
            p {
                strong { "{source.name}" }
                if !source.enabled {
                    span { class: "pill small", " disabled" }
                }
            }
            p { class: "muted small", "{source.rss_url}" }
            p { class: "muted small", "{category} • {tags}" }
        }
    }
}
