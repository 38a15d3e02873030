use api::models::NewsArticle;
use dioxus::prelude::*;

use crate::icons::{FaArrowUpRightFromSquare, FaBookmark, FaEyeSlash};
use crate::Icon;

/// One article in a feed, with save/hide actions and links.
#[component]
pub fn ArticleCard(
    article: NewsArticle,
    on_save_toggle: EventHandler<NewsArticle>,
    on_hide: EventHandler<NewsArticle>,
    #[props(default = true)] show_actions: bool,
) -> Element {
    let detail_href = format!("/news/articles/{}", article.id);
    let save_label = if article.saved { "Unsave" } else { "Save" };
    let published = article.published_label();
    let category = article.category_label().to_string();
    let summary = article.summary_text().to_string();
    let for_save = article.clone();
    let for_hide = article.clone();

    rsx! {
        article {
            class: "card article-card",
            div {
                class: "article-card__head",
                div {
                    h3 { "{article.title}" }
                    p { class: "muted small", "{article.source.name} • {published}" }
                }
                span { class: "pill", "{category}" }
            }
            p { class: "article-card__summary", "{summary}" }
            if !article.tags.is_empty() {
                div {
                    class: "tag-row",
                    for tag in article.tags.iter() {
                        span { key: "{tag}", class: "pill small", "{tag}" }
                    }
                }
            }
            if show_actions {
                div {
                    class: "actions",
                    button {
                        class: if article.saved { "ghost active" } else { "ghost" },
                        onclick: move |_| on_save_toggle.call(for_save.clone()),
                        Icon { icon: FaBookmark, width: 12, height: 12 }
                        " {save_label}"
                    }
                    button {
                        class: "ghost",
                        onclick: move |_| on_hide.call(for_hide.clone()),
                        Icon { icon: FaEyeSlash, width: 12, height: 12 }
                        " Hide"
                    }
                    Link { class: "ghost", to: detail_href, "View details" }
                    a {
                        class: "ghost",
                        href: "{article.link}",
                        target: "_blank",
                        rel: "noreferrer",
                        Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                        " Open original"
                    }
                }
            }
        }
    }
}
