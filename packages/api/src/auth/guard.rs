//! # Route guards
//!
//! Two gates protect routes. Both re-verify the session on every mount and
//! keep nothing between mounts.
//!
//! | Situation | Member gate | Admin gate |
//! |-----------|-------------|------------|
//! | No token | Denied, no request | Denied, no request |
//! | Token, verifying | Checking | Allowed (optimistic) |
//! | Identity ok | Allowed | Allowed iff role is admin, else Denied (session kept) |
//! | Identity 401 | session cleared, Denied | session cleared, Denied |
//! | Other failure | session cleared, Denied | Denied, session kept |
//!
//! The two gates deliberately disagree on non-401 failures: a flaky network
//! signs a member out but only bounces an admin back to `/news`.
//!
//! Denied redirects to [`GuardKind::redirect_path`].

use std::future::Future;

use store::KeyValueStore;

use crate::auth::session::Session;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserInfo;
use crate::transport::Transport;

/// Anything that can answer "who does the stored token belong to".
pub trait IdentityProvider {
    fn current_user(&self) -> impl Future<Output = Result<UserInfo, ApiError>>;
}

impl<T: Transport, S: KeyValueStore> IdentityProvider for ApiClient<T, S> {
    async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.me().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Member,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Allowed,
    Denied,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuardVerdict {
    pub state: GuardState,
    /// The verified user, when the identity call succeeded.
    pub user: Option<UserInfo>,
}

impl GuardVerdict {
    fn denied() -> Self {
        Self {
            state: GuardState::Denied,
            user: None,
        }
    }
}

impl GuardKind {
    pub fn redirect_path(&self) -> &'static str {
        match self {
            Self::Member => "/login",
            Self::Admin => "/news",
        }
    }

    /// What to render before the identity call resolves.
    pub fn initial_state(&self, has_token: bool) -> GuardState {
        match (self, has_token) {
            (_, false) => GuardState::Denied,
            (Self::Admin, true) => GuardState::Allowed,
            (Self::Member, true) => GuardState::Checking,
        }
    }

    /// Verify the session and decide.
    pub async fn check<S, I>(&self, session: &Session<S>, identity: &I) -> GuardVerdict
    where
        S: KeyValueStore,
        I: IdentityProvider,
    {
        if !session.has_token() {
            return GuardVerdict::denied();
        }

        match identity.current_user().await {
            Ok(user) => {
                session.refresh_user(&user);
                // The session may have been torn down while the call was out.
                if !session.has_token() {
                    tracing::debug!(kind = ?self, "session cleared during identity check");
                    return GuardVerdict::denied();
                }
                let allowed = match self {
                    Self::Member => true,
                    Self::Admin => user.role.is_admin(),
                };
                if !allowed {
                    tracing::info!(user_id = user.id, role = %user.role, "admin gate refused");
                }
                GuardVerdict {
                    state: if allowed {
                        GuardState::Allowed
                    } else {
                        GuardState::Denied
                    },
                    user: Some(user),
                }
            }
            Err(err) if err.is_unauthorized() => {
                session.clear();
                GuardVerdict::denied()
            }
            Err(err) => {
                match self {
                    Self::Admin => {
                        tracing::error!(error = %err, "admin identity check failed");
                    }
                    Self::Member => {
                        tracing::warn!(error = %err, "member identity check failed");
                        session.clear();
                    }
                }
                GuardVerdict::denied()
            }
        }
    }
}
