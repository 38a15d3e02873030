//! # Generic backend client
//!
//! [`ApiClient`] turns `(method, path, query, body)` into an [`HttpRequest`],
//! sends it over a [`Transport`], and decodes the answer into a typed value.
//!
//! ## Request shape
//!
//! | Aspect | Behaviour |
//! |--------|-----------|
//! | URL | `base_url` + `path`; empty query values are omitted |
//! | Headers | `Content-Type: application/json` always; `Authorization: Bearer <token>` when a token is stored |
//! | Body | JSON-encoded request model, or none |
//!
//! ## Response handling
//!
//! | Outcome | Result |
//! |---------|--------|
//! | No response | [`ApiError::Transport`] |
//! | Non-2xx | [`ApiError::Http`] with the normalised message (see [`error_message`]) |
//! | 2xx, body decodes | `Ok(T)`; an empty body decodes as JSON `null`, so `()` accepts 204 |
//! | 2xx, body does not decode | [`ApiError::Decode`] |
//!
//! A 401 is returned like any other status. The enforcing clients in
//! [`crate::news`] and [`crate::coach`] layer their policy on top.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::KeyValueStore;

use crate::auth::session::Session;
use crate::error::ApiError;
use crate::transport::{HttpRequest, Method, Transport};

const FALLBACK_MESSAGE: &str = "Request failed";

#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport, S: KeyValueStore> {
    transport: T,
    base_url: String,
    session: Session<S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, base_url: impl Into<String>, session: Session<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with the non-empty `query` pairs appended.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let raw = format!("{}{}", self.base_url, path);
        let pairs: Vec<_> = query.iter().filter(|(_, v)| !v.trim().is_empty()).collect();
        if pairs.is_empty() {
            return raw;
        }
        match reqwest::Url::parse(&raw) {
            Ok(mut url) => {
                {
                    let mut qp = url.query_pairs_mut();
                    for (k, v) in pairs {
                        qp.append_pair(k, v);
                    }
                }
                url.to_string()
            }
            Err(e) => {
                tracing::warn!(url = %raw, error = %e, "cannot parse url, query dropped");
                raw
            }
        }
    }

    /// Send a request with the stored token, if any.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let token = self.session.token();
        self.request_with_token(method, path, query, body, token.as_deref())
            .await
    }

    /// Send a request with an explicit token, bypassing storage. Used during
    /// sign-in before the session has been written.
    pub async fn request_with_token<B, R>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::decode(format!("cannot encode request body: {e}")))?;

        let request = HttpRequest {
            method,
            url: self.url(path, query),
            headers,
            body,
        };
        tracing::debug!(method = %request.method, url = %request.url, "api request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(path, error = %e, "api transport failure");
            ApiError::transport(e.0)
        })?;

        if !response.is_success() {
            let message = error_message(&response.body);
            tracing::debug!(path, status = response.status, %message, "api error response");
            return Err(ApiError::http(response.status, message));
        }
        decode_body(&response.body)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::GET, path, &[], None).await
    }

    pub async fn get_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        self.request::<(), R>(Method::GET, path, query, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::POST, path, &[], None).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn patch_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::PATCH, path, &[], None).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<(), R>(Method::DELETE, path, &[], None).await
    }
}

/// Decode a 2xx body. An empty body is treated as JSON `null`.
fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::decode(e.to_string()))
}

/// Human-readable message for a non-2xx body.
///
/// A JSON `detail` string is used as is; any other non-empty `detail` is
/// rendered as JSON text. JSON without a usable `detail` and empty bodies
/// give the generic fallback. Anything else is the trimmed raw text.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => match value.get("detail") {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(serde_json::Value::Null | serde_json::Value::Bool(false)) | None => {
                FALLBACK_MESSAGE.to_string()
            }
            Some(serde_json::Value::String(_)) => FALLBACK_MESSAGE.to_string(),
            Some(other) => other.to_string(),
        },
        Err(_) => trimmed.to_string(),
    }
}
