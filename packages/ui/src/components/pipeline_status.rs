use api::models::{format_date_time, NewsStatus};
use dioxus::prelude::*;

/// Last ingestion run and the "Fetch now" trigger. Counters read zero until
/// a status has loaded.
#[component]
pub fn PipelineStatusPanel(
    #[props(!optional)] status: Option<NewsStatus>,
    is_running: bool,
    on_fetch_now: EventHandler<()>,
) -> Element {
    let last_run = format_date_time(status.as_ref().and_then(|s| s.last_run.as_deref()));
    let count = |f: fn(&NewsStatus) -> u32| status.as_ref().map(f).unwrap_or(0);
    let checked = count(|s| s.sources_checked);
    let ingested = count(|s| s.items_ingested);
    let success = count(|s| s.sources_success);
    let failed = count(|s| s.sources_failed);
    let last_error = status
        .as_ref()
        .and_then(|s| s.last_error.clone())
        .unwrap_or_else(|| "None".to_string());

    rsx! {
        section {
            class: "card pipeline-status",
            div {
                class: "card__head",
                div {
                    h2 { "Pipeline Status" }
                    p { class: "muted small", "Monitor the ingestion pipeline." }
                }
                button {
                    class: "primary",
                    disabled: is_running,
                    onclick: move |_| on_fetch_now.call(()),
                    if is_running { "Running..." } else { "Fetch now" }
                }
            }
            div {
                class: "stats-grid",
                Stat { label: "Last run", value: last_run }
                Stat { label: "Sources checked", value: checked.to_string() }
                Stat { label: "Items ingested", value: ingested.to_string() }
                Stat { label: "Success", value: success.to_string() }
                Stat { label: "Failed", value: failed.to_string() }
                Stat { label: "Last error", value: last_error }
            }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            p { class: "stat__label", "{label}" }
            p { class: "stat__value", "{value}" }
        }
    }
}
