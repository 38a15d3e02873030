//! Source management and pipeline control for admins.

use api::models::{NewsSource, NewsSourcePayload, NewsSourceUpdate, NewsStatus};
use dioxus::prelude::*;

use crate::components::{ErrorBanner, PageHeader, PipelineStatusPanel, SourcesTable};
use crate::state::{use_services, News};

/// Reload sources and status. Each failure lands in `error` on its own.
async fn reload(
    news: News,
    mut sources: Signal<Vec<NewsSource>>,
    mut status: Signal<Option<NewsStatus>>,
    mut error: Signal<Option<String>>,
) {
    match news.admin_sources().await {
        Ok(found) => sources.set(found),
        Err(err) => error.set(Some(err.to_string())),
    }
    match news.admin_status().await {
        Ok(found) => status.set(Some(found)),
        Err(err) => error.set(Some(err.to_string())),
    }
}

#[component]
pub fn AdminNewsView() -> Element {
    let services = use_services();
    let mut sources = use_signal(Vec::<NewsSource>::new);
    let status = use_signal(|| Option::<NewsStatus>::None);
    let mut error = use_signal(|| Option::<String>::None);
    // Starts busy: the first load is kicked off below.
    let mut busy = use_signal(|| true);
    let mut running = use_signal(|| false);

    use_hook({
        let news = services.news.clone();
        move || {
            spawn(async move {
                reload(news, sources, status, error).await;
                busy.set(false);
            });
        }
    });

    let news = services.news.clone();
    let fetch_now = move |_: ()| {
        if running() {
            return;
        }
        let news = news.clone();
        running.set(true);
        error.set(None);
        spawn(async move {
            match news.admin_fetch_now().await {
                Ok(report) => {
                    tracing::info!(items = report.items_ingested, "news fetch finished");
                    reload(news, sources, status, error).await;
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            running.set(false);
        });
    };

    let news = services.news.clone();
    let create = move |payload: NewsSourcePayload| {
        let news = news.clone();
        spawn(async move {
            match news.admin_create_source(&payload).await {
                Ok(created) => sources.write().insert(0, created),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let news = services.news.clone();
    let update = move |(id, update): (i64, NewsSourceUpdate)| {
        let news = news.clone();
        spawn(async move {
            match news.admin_update_source(id, &update).await {
                Ok(updated) => replace_source(sources, updated),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let news = services.news.clone();
    let toggle = move |id: i64| {
        let news = news.clone();
        spawn(async move {
            match news.admin_toggle_source(id).await {
                Ok(updated) => replace_source(sources, updated),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let news = services.news.clone();
    let delete = move |id: i64| {
        let news = news.clone();
        spawn(async move {
            match news.admin_delete_source(id).await {
                Ok(()) => sources.write().retain(|s| s.id != id),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page admin",
            PageHeader { title: "News Admin", subtitle: "Control sources, pipeline status, and fetch cycles." }
            if let Some(err) = error() {
                ErrorBanner { message: err }
            }
            PipelineStatusPanel {
                status: status(),
                is_running: running(),
                on_fetch_now: fetch_now,
            }
            SourcesTable {
                sources: sources(),
                is_loading: busy(),
                on_create: create,
                on_update: update,
                on_toggle: toggle,
                on_delete: delete,
            }
        }
    }
}

fn replace_source(mut sources: Signal<Vec<NewsSource>>, updated: NewsSource) {
    if let Some(slot) = sources.write().iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}
