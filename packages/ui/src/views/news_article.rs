use api::models::NewsArticle;
use dioxus::prelude::*;

use crate::components::{ArticleCard, ErrorBanner, Notice, PageHeader};
use crate::state::use_services;

/// One article by id. `id` is the raw route segment.
#[component]
pub fn NewsArticleView(id: String) -> Element {
    let services = use_services();
    let parsed_id = id.trim().parse::<i64>().ok();

    let mut article = use_signal(|| Option::<NewsArticle>::None);
    let mut loading = use_signal(|| parsed_id.is_some());
    let mut error = use_signal(|| parsed_id.is_none().then(|| "Invalid article.".to_string()));

    use_effect({
        let news = services.news.clone();
        move || {
            let Some(id) = parsed_id else { return };
            let news = news.clone();
            loading.set(true);
            spawn(async move {
                match news.article(id).await {
                    Ok(found) => {
                        article.set(Some(found));
                        error.set(None);
                    }
                    Err(err) if err.status() == Some(404) => article.set(None),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    });

    let news = services.news.clone();
    let toggle_save = move |current: NewsArticle| {
        let news = news.clone();
        spawn(async move {
            let result = if current.saved {
                news.unsave_article(current.id).await
            } else {
                news.save_article(current.id).await
            };
            match result {
                Ok(_) => {
                    if let Some(a) = article.write().as_mut() {
                        a.saved = !current.saved;
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let news = services.news.clone();
    let hide = move |current: NewsArticle| {
        let news = news.clone();
        spawn(async move {
            match news.hide_article(current.id).await {
                Ok(_) => article.set(None),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page news",
            PageHeader { title: "Article details", subtitle: "Dive deeper into the story and save it for later." }
            Link { class: "ghost", to: "/news", "Back to feed" }
            if let Some(err) = error() {
                ErrorBanner { message: err }
            }
            if loading() {
                Notice { "Loading article..." }
            } else if let Some(current) = article() {
                ArticleCard { article: current.clone(), on_save_toggle: toggle_save, on_hide: hide }
                if let Some(content) = current.content.clone().filter(|c| !c.trim().is_empty()) {
                    div { class: "card article-content", p { "{content}" } }
                }
                if let Some(author) = current.author.clone() {
                    p { class: "muted small", "By {author}" }
                }
            } else if parsed_id.is_some() && error().is_none() {
                Notice { "Article not found." }
            }
        }
    }
}
