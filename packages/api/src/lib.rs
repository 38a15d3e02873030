//! # API crate: backend client for the GymUnity frontends
//!
//! This crate is everything between a page and the GymUnity backend: typed
//! request/response models, an HTTP client that attaches the bearer token and
//! normalises failures, the session object that owns the persisted
//! `(token, user)` pair, and the guard logic that decides whether a protected
//! route may render.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Register / login / `users/me`, the [`Session`] single writer, and the member/admin [`auth::guard`] state machine |
//! | [`client`] | [`ApiClient`]: URL building, bearer header, JSON bodies, error normalisation |
//! | [`coach`] | AI coach client and per-user chat history persistence |
//! | [`error`] | [`ApiError`] taxonomy: transport, HTTP, decode, unauthorised |
//! | [`interceptor`] | Central hook fired when an enforcing client sees a 401 |
//! | [`models`] | Wire models for users, news and the AI coach |
//! | [`news`] | [`NewsClient`] (401-enforcing), admin endpoints, feed pagination |
//! | [`transport`] | [`Transport`] trait and its `reqwest` implementation |
//!
//! ## Two 401 policies
//!
//! [`ApiClient`] is passive: a 401 comes back as `ApiError::Http { status: 401 }`
//! and the caller decides. [`NewsClient`] and [`coach::CoachClient`] enforce the
//! session: a 401 clears the stored credentials, fires the registered
//! [`UnauthorizedInterceptor`], and returns [`ApiError::Unauthorized`].

pub mod auth;
pub mod client;
pub mod coach;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod news;
pub mod transport;

pub use auth::guard::{GuardKind, GuardState, GuardVerdict, IdentityProvider};
pub use auth::session::Session;
pub use client::ApiClient;
pub use coach::{ChatHistory, CoachClient};
pub use error::ApiError;
pub use interceptor::UnauthorizedInterceptor;
pub use models::{Role, UserInfo};
pub use news::{FeedQuery, NewsClient, NewsFilters, Pager};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub use store::{KeyValueStore, Storage};

#[cfg(test)]
pub(crate) mod testing;
