//! # News client
//!
//! [`NewsClient`] wraps an [`ApiClient`] with the enforcing 401 policy: on a
//! 401 the session is cleared, the registered [`UnauthorizedInterceptor`]
//! fires, and the call fails with [`ApiError::Unauthorized`]. Every other
//! outcome passes through unchanged.
//!
//! ## Endpoints
//!
//! | Method | Call |
//! |--------|------|
//! | [`sources`](NewsClient::sources) | `GET /news/sources` |
//! | [`feed`](NewsClient::feed) | `GET /news/feed?…` |
//! | [`explore`](NewsClient::explore) | `GET /news/explore?…` |
//! | [`saved`](NewsClient::saved) | `GET /news/saved?page&page_size` |
//! | [`article`](NewsClient::article) | `GET /news/articles/{id}` |
//! | [`preferences`](NewsClient::preferences) | `GET /news/preferences` |
//! | [`update_preferences`](NewsClient::update_preferences) | `POST /news/preferences` |
//! | [`save_article`](NewsClient::save_article) | `POST /news/articles/{id}/save` |
//! | [`unsave_article`](NewsClient::unsave_article) | `DELETE /news/articles/{id}/save` |
//! | [`hide_article`](NewsClient::hide_article) | `POST /news/articles/{id}/hide` |
//! | [`chat`](NewsClient::chat) | `POST /news/chat` |
//! | [`admin_sources`](NewsClient::admin_sources) | `GET /admin/news/sources` |
//! | [`admin_create_source`](NewsClient::admin_create_source) | `POST /admin/news/sources` |
//! | [`admin_update_source`](NewsClient::admin_update_source) | `PUT /admin/news/sources/{id}` |
//! | [`admin_toggle_source`](NewsClient::admin_toggle_source) | `PATCH /admin/news/sources/{id}/toggle` |
//! | [`admin_delete_source`](NewsClient::admin_delete_source) | `DELETE /admin/news/sources/{id}` |
//! | [`admin_status`](NewsClient::admin_status) | `GET /admin/news/status` |
//! | [`admin_fetch_now`](NewsClient::admin_fetch_now) | `POST /admin/news/fetch-now` |

mod pagination;

pub use pagination::{FeedQuery, NewsFilters, Pager};

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::interceptor::UnauthorizedInterceptor;
use crate::models::{
    FetchNowResponse, NewsArticle, NewsChatRequest, NewsChatResponse, NewsFeedResponse,
    NewsPreferences, NewsSource, NewsSourcePayload, NewsSourceUpdate, NewsStatus,
    StatusResponse,
};
use crate::transport::Transport;

/// Clear the session and fire the interceptor if `result` is a 401.
pub(crate) fn enforce_session<R, T, S>(
    api: &ApiClient<T, S>,
    interceptor: &UnauthorizedInterceptor,
    result: Result<R, ApiError>,
) -> Result<R, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    match result {
        Err(err) if err.is_unauthorized() => {
            tracing::info!("401 from backend, ending session");
            api.session().clear();
            interceptor.fire();
            Err(ApiError::Unauthorized)
        }
        other => other,
    }
}

#[derive(Clone, Debug)]
pub struct NewsClient<T: Transport, S: KeyValueStore> {
    api: ApiClient<T, S>,
    interceptor: UnauthorizedInterceptor,
}

impl<T: Transport, S: KeyValueStore> NewsClient<T, S> {
    pub fn new(api: ApiClient<T, S>, interceptor: UnauthorizedInterceptor) -> Self {
        Self { api, interceptor }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    fn enforce<R>(&self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        enforce_session(&self.api, &self.interceptor, result)
    }

    pub async fn sources(&self) -> Result<Vec<NewsSource>, ApiError> {
        self.enforce(self.api.get("/news/sources").await)
    }

    pub async fn feed(&self, query: &FeedQuery) -> Result<NewsFeedResponse, ApiError> {
        self.enforce(self.api.get_query("/news/feed", &query.to_query()).await)
    }

    pub async fn explore(&self, query: &FeedQuery) -> Result<NewsFeedResponse, ApiError> {
        self.enforce(self.api.get_query("/news/explore", &query.to_query()).await)
    }

    pub async fn saved(&self, page: u32, page_size: u32) -> Result<NewsFeedResponse, ApiError> {
        let query = [("page", page.to_string()), ("page_size", page_size.to_string())];
        self.enforce(self.api.get_query("/news/saved", &query).await)
    }

    pub async fn article(&self, id: i64) -> Result<NewsArticle, ApiError> {
        self.enforce(self.api.get(&format!("/news/articles/{id}")).await)
    }

    pub async fn preferences(&self) -> Result<NewsPreferences, ApiError> {
        self.enforce(self.api.get("/news/preferences").await)
    }

    pub async fn update_preferences(
        &self,
        prefs: &NewsPreferences,
    ) -> Result<NewsPreferences, ApiError> {
        self.enforce(self.api.post("/news/preferences", prefs).await)
    }

    pub async fn save_article(&self, id: i64) -> Result<StatusResponse, ApiError> {
        self.enforce(self.api.post_empty(&format!("/news/articles/{id}/save")).await)
    }

    pub async fn unsave_article(&self, id: i64) -> Result<StatusResponse, ApiError> {
        self.enforce(self.api.delete(&format!("/news/articles/{id}/save")).await)
    }

    pub async fn hide_article(&self, id: i64) -> Result<StatusResponse, ApiError> {
        self.enforce(self.api.post_empty(&format!("/news/articles/{id}/hide")).await)
    }

    pub async fn chat(&self, message: &str) -> Result<NewsChatResponse, ApiError> {
        let body = NewsChatRequest {
            message: message.to_string(),
        };
        self.enforce(self.api.post("/news/chat", &body).await)
    }

    pub async fn admin_sources(&self) -> Result<Vec<NewsSource>, ApiError> {
        self.enforce(self.api.get("/admin/news/sources").await)
    }

    pub async fn admin_create_source(
        &self,
        payload: &NewsSourcePayload,
    ) -> Result<NewsSource, ApiError> {
        self.enforce(self.api.post("/admin/news/sources", payload).await)
    }

    pub async fn admin_update_source(
        &self,
        id: i64,
        update: &NewsSourceUpdate,
    ) -> Result<NewsSource, ApiError> {
        self.enforce(self.api.put(&format!("/admin/news/sources/{id}"), update).await)
    }

    pub async fn admin_toggle_source(&self, id: i64) -> Result<NewsSource, ApiError> {
        self.enforce(
            self.api
                .patch_empty(&format!("/admin/news/sources/{id}/toggle"))
                .await,
        )
    }

    pub async fn admin_delete_source(&self, id: i64) -> Result<(), ApiError> {
        self.enforce(self.api.delete(&format!("/admin/news/sources/{id}")).await)
    }

    pub async fn admin_status(&self) -> Result<NewsStatus, ApiError> {
        self.enforce(self.api.get("/admin/news/status").await)
    }

    pub async fn admin_fetch_now(&self) -> Result<FetchNowResponse, ApiError> {
        self.enforce(self.api.post_empty("/admin/news/fetch-now").await)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::models::Role;
    use crate::testing::{client, user, FakeTransport};
    use crate::transport::Method;

    use super::*;

    const SOURCE: &str = r#"{"id":3,"name":"Barbell Blog","rss_url":"https://bb.io/rss","category":"training","tags":["strength"],"enabled":true}"#;

    fn article_json(id: i64, saved: bool) -> String {
        format!(
            r#"{{"id":{id},"title":"Deadlift tips","link":"https://bb.io/{id}","summary":"Hinge.","tags":["strength"],"source":{SOURCE},"saved":{saved}}}"#
        )
    }

    fn news_client(fake: &FakeTransport) -> (NewsClient<FakeTransport, store::MemoryStore>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let seen = fired.clone();
        let api = client(fake);
        api.session().establish("tok", &user(1, Role::User));
        let interceptor = UnauthorizedInterceptor::new(move || seen.set(seen.get() + 1));
        (NewsClient::new(api, interceptor), fired)
    }

    #[tokio::test]
    async fn test_401_clears_session_and_fires_once() {
        let fake = FakeTransport::new();
        fake.on(Method::GET, "/news/preferences", 401, r#"{"detail":"Not authenticated"}"#);
        let (news, fired) = news_client(&fake);

        let err = news.preferences().await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(fired.get(), 1);
        assert!(!news.api().session().has_token());
        assert!(news.api().session().user().is_none());
    }

    #[tokio::test]
    async fn test_other_errors_pass_through() {
        let fake = FakeTransport::new();
        fake.on(Method::GET, "/news/articles/99", 404, r#"{"detail":"Article not found"}"#);
        let (news, fired) = news_client(&fake);

        let err = news.article(99).await.unwrap_err();
        assert_eq!(err, ApiError::http(404, "Article not found"));
        assert_eq!(fired.get(), 0);
        assert!(news.api().session().has_token());
    }

    #[tokio::test]
    async fn test_feed_query_string() {
        let fake = FakeTransport::new();
        let body = format!(r#"{{"items":[{}],"page":2,"page_size":6,"total":7}}"#, article_json(5, false));
        fake.on(Method::GET, "/news/feed", 200, &body);
        let (news, _) = news_client(&fake);

        let query = FeedQuery::new(
            NewsFilters {
                topic: "strength".into(),
                ..Default::default()
            },
            6,
        )
        .with_page(2);
        let feed = news.feed(&query).await.unwrap();
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].source.name, "Barbell Blog");
        assert_eq!(Pager::new(feed.page, feed.page_size, feed.total).total_pages(), 2);

        let url = fake.last_request().unwrap().url;
        assert!(url.ends_with("/news/feed?topic=strength&page=2&page_size=6"), "{url}");
    }

    #[tokio::test]
    async fn test_saved_defaults_and_toggles() {
        let fake = FakeTransport::new();
        fake.on(Method::GET, "/news/saved", 200, r#"{"items":[],"page":1,"page_size":12,"total":0}"#);
        fake.on(Method::POST, "/news/articles/5/save", 200, r#"{"status":"saved"}"#);
        fake.on(Method::DELETE, "/news/articles/5/save", 200, r#"{"status":"removed"}"#);
        fake.on(Method::POST, "/news/articles/5/hide", 200, r#"{"status":"hidden"}"#);
        let (news, _) = news_client(&fake);

        news.saved(1, 12).await.unwrap();
        assert!(fake.last_request().unwrap().url.ends_with("?page=1&page_size=12"));

        assert_eq!(news.save_article(5).await.unwrap().status, "saved");
        assert_eq!(news.unsave_article(5).await.unwrap().status, "removed");
        assert_eq!(news.hide_article(5).await.unwrap().status, "hidden");
    }

    #[tokio::test]
    async fn test_preferences_replace_wholesale() {
        let fake = FakeTransport::new();
        let echo = r#"{"topics":["cardio"],"level":"intermediate","equipment":"home","blocked_keywords":[]}"#;
        fake.on(Method::POST, "/news/preferences", 200, echo);
        let (news, _) = news_client(&fake);

        let mut prefs = NewsPreferences::default();
        prefs.toggle_topic("cardio");
        let saved = news.update_preferences(&prefs).await.unwrap();
        assert_eq!(saved.topics, vec!["cardio"]);
        let sent = fake.last_request().unwrap().body.unwrap();
        assert_eq!(
            sent,
            r#"{"topics":["cardio"],"level":"beginner","equipment":"gym","blocked_keywords":[]}"#
        );
    }

    #[tokio::test]
    async fn test_admin_calls() {
        let fake = FakeTransport::new();
        fake.on(Method::PATCH, "/admin/news/sources/3/toggle", 200, SOURCE);
        fake.on(Method::PUT, "/admin/news/sources/3", 200, SOURCE);
        fake.on(Method::DELETE, "/admin/news/sources/3", 204, "");
        fake.on(
            Method::POST,
            "/admin/news/fetch-now",
            200,
            r#"{"fetched_at":"2025-02-01T10:00:00","sources_checked":4,"sources_success":3,"sources_failed":1,"items_ingested":12,"last_error":"timeout"}"#,
        );
        let (news, _) = news_client(&fake);

        assert_eq!(news.admin_toggle_source(3).await.unwrap().id, 3);
        let update = NewsSourceUpdate {
            name: Some("Barbell Blog".into()),
            ..Default::default()
        };
        news.admin_update_source(3, &update).await.unwrap();
        assert_eq!(
            fake.last_request().unwrap().body.as_deref(),
            Some(r#"{"name":"Barbell Blog"}"#)
        );
        news.admin_delete_source(3).await.unwrap();
        let run = news.admin_fetch_now().await.unwrap();
        assert_eq!(run.items_ingested, 12);
        assert_eq!(run.last_error.as_deref(), Some("timeout"));
    }

    #[tokio::test]
    async fn test_chat() {
        let fake = FakeTransport::new();
        fake.on(Method::POST, "/news/chat", 200, r#"{"reply":"Try zone 2.","follow_up":"How many days?"}"#);
        let (news, _) = news_client(&fake);
        let reply = news.chat("cardio?").await.unwrap();
        assert_eq!(reply.combined(), "Try zone 2. How many days?");
        assert_eq!(fake.last_request().unwrap().body.as_deref(), Some(r#"{"message":"cardio?"}"#));
    }
}
