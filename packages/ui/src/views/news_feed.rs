//! Paged article lists: the personalised feed, explore, and saved articles.
//!
//! Every fetch takes a ticket from a per-page counter; a response whose
//! ticket is no longer the latest is dropped, so a slow early page never
//! overwrites a later one.

use api::models::{NewsArticle, NewsFeedResponse, NewsSource};
use api::{ApiError, FeedQuery, NewsFilters, Pager};
use dioxus::prelude::*;

use crate::components::{ArticleCard, ErrorBanner, FiltersBar, Notice, PageHeader, PagerBar};
use crate::icons::FaNewspaper;
use crate::state::{use_services, News};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// `/news/feed`, filtered by saved preferences.
    Personal,
    /// `/news/explore`, every source.
    Explore,
}

impl FeedMode {
    fn title(self) -> &'static str {
        match self {
            Self::Personal => "GymUnity News",
            Self::Explore => "Explore GymUnity News",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Personal => "Your personalized fitness feed based on saved preferences.",
            Self::Explore => "Browse all sources and discover trending fitness updates.",
        }
    }

    async fn fetch(self, news: &News, query: &FeedQuery) -> Result<NewsFeedResponse, ApiError> {
        match self {
            Self::Personal => news.feed(query).await,
            Self::Explore => news.explore(query).await,
        }
    }
}

/// Results of the latest fetch plus local save/hide edits.
#[derive(Clone, Copy)]
struct ArticleList {
    items: Signal<Vec<NewsArticle>>,
    total: Signal<u64>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    ticket: Signal<u64>,
}

impl ArticleList {
    fn use_new() -> Self {
        Self {
            items: use_signal(Vec::new),
            total: use_signal(|| 0),
            loading: use_signal(|| false),
            error: use_signal(|| None),
            ticket: use_signal(|| 0),
        }
    }

    /// Start a fetch and return its ticket.
    fn begin(&mut self) -> u64 {
        let next = *self.ticket.peek() + 1;
        self.ticket.set(next);
        self.loading.set(true);
        self.error.set(None);
        next
    }

    /// Apply a response if `ticket` is still the latest.
    fn finish(&mut self, ticket: u64, result: Result<NewsFeedResponse, ApiError>) {
        if *self.ticket.peek() != ticket {
            tracing::debug!(ticket, "dropping stale news response");
            return;
        }
        match result {
            Ok(page) => {
                self.total.set(page.total);
                self.items.set(page.items);
            }
            Err(err) => self.error.set(Some(err.to_string())),
        }
        self.loading.set(false);
    }

    fn set_saved(&mut self, id: i64, saved: bool) {
        if let Some(article) = self.items.write().iter_mut().find(|a| a.id == id) {
            article.saved = saved;
        }
    }

    fn remove(&mut self, id: i64) {
        self.items.write().retain(|a| a.id != id);
    }
}

/// Flip the saved flag on the backend, then locally.
async fn toggle_saved(news: News, mut list: ArticleList, article: NewsArticle, drop_on_unsave: bool) {
    let result = if article.saved {
        news.unsave_article(article.id).await
    } else {
        news.save_article(article.id).await
    };
    match result {
        Ok(_) if article.saved && drop_on_unsave => list.remove(article.id),
        Ok(_) => list.set_saved(article.id, !article.saved),
        Err(err) => list.error.set(Some(err.to_string())),
    }
}

async fn hide(news: News, mut list: ArticleList, article: NewsArticle) {
    match news.hide_article(article.id).await {
        Ok(_) => list.remove(article.id),
        Err(err) => list.error.set(Some(err.to_string())),
    }
}

#[component]
pub fn NewsFeedView(mode: FeedMode) -> Element {
    let services = use_services();
    let page_size = services.config.news.page_size;

    let mut sources = use_signal(Vec::<NewsSource>::new);
    let mut draft = use_signal(NewsFilters::default);
    let mut query = use_signal(|| FeedQuery::new(NewsFilters::default(), page_size));
    let list = ArticleList::use_new();

    // Source list for the filter dropdown; a failure just leaves it empty.
    use_hook({
        let news = services.news.clone();
        move || {
            spawn(async move {
                match news.sources().await {
                    Ok(found) => sources.set(found),
                    Err(err) => tracing::warn!(error = %err, "news sources unavailable"),
                }
            });
        }
    });

    use_effect({
        let news = services.news.clone();
        move || {
            let query = query();
            let mut list = list;
            let ticket = list.begin();
            let news = news.clone();
            spawn(async move {
                let result = mode.fetch(&news, &query).await;
                list.finish(ticket, result);
            });
        }
    });

    let pager = Pager::new(query.read().page, page_size, (list.total)());
    let news = services.news.clone();
    let news_for_hide = services.news.clone();

    rsx! {
        div {
            class: "page news",
            PageHeader { title: mode.title().to_string(), subtitle: mode.subtitle().to_string() }
            FiltersBar {
                value: draft(),
                sources: sources(),
                is_loading: (list.loading)(),
                on_change: move |next| draft.set(next),
                on_apply: move |_| query.write().apply_filters(draft()),
                on_reset: move |_| {
                    draft.set(NewsFilters::default());
                    query.write().apply_filters(NewsFilters::default());
                },
            }
            if let Some(err) = (list.error)() {
                ErrorBanner { message: err }
            }
            if (list.loading)() {
                Notice { "Loading your feed..." }
            } else if list.items.read().is_empty() {
                Notice {
                    Icon { icon: FaNewspaper, width: 16, height: 16 }
                    " No articles match your preferences."
                }
            } else {
                div {
                    class: "article-grid",
                    for article in list.items.read().iter().cloned() {
                        ArticleCard {
                            key: "{article.id}",
                            article,
                            on_save_toggle: {
                                let news = news.clone();
                                move |article| {
                                    spawn(toggle_saved(news.clone(), list, article, false));
                                }
                            },
                            on_hide: {
                                let news = news_for_hide.clone();
                                move |article| {
                                    spawn(hide(news.clone(), list, article));
                                }
                            },
                        }
                    }
                }
            }
            PagerBar {
                pager,
                is_loading: (list.loading)(),
                on_page: move |page| {
                    let next = query.peek().clone().with_page(page);
                    query.set(next);
                },
            }
        }
    }
}

#[component]
pub fn NewsSavedView() -> Element {
    let services = use_services();
    let page_size = services.config.news.saved_page_size;
    let mut page = use_signal(|| 1u32);
    let list = ArticleList::use_new();

    use_effect({
        let news = services.news.clone();
        move || {
            let page = page();
            let mut list = list;
            let ticket = list.begin();
            let news = news.clone();
            spawn(async move {
                let result = news.saved(page, page_size).await;
                list.finish(ticket, result);
            });
        }
    });

    let pager = Pager::new(page(), page_size, (list.total)());
    let news = services.news.clone();
    let news_for_hide = services.news.clone();

    rsx! {
        div {
            class: "page news",
            PageHeader { title: "Saved Articles", subtitle: "Everything you bookmarked for later." }
            if let Some(err) = (list.error)() {
                ErrorBanner { message: err }
            }
            if (list.loading)() {
                Notice { "Loading saved articles..." }
            } else if list.items.read().is_empty() {
                Notice { "No saved articles yet." }
            } else {
                div {
                    class: "article-grid",
                    for article in list.items.read().iter().cloned() {
                        ArticleCard {
                            key: "{article.id}",
                            article,
                            on_save_toggle: {
                                let news = news.clone();
                                move |article| {
                                    spawn(toggle_saved(news.clone(), list, article, true));
                                }
                            },
                            on_hide: {
                                let news = news_for_hide.clone();
                                move |article| {
                                    spawn(hide(news.clone(), list, article));
                                }
                            },
                        }
                    }
                }
            }
            PagerBar {
                pager,
                is_loading: (list.loading)(),
                on_page: move |next| page.set(next),
            }
        }
    }
}
