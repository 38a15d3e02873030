//! Well-known storage keys.
//!
//! Every persisted value lives in one flat namespace. These names are shared
//! with builds of the site that predate this client, so they must not change.

/// Raw bearer token (not JSON encoded).
pub const ACCESS_TOKEN: &str = "access_token";
/// JSON user record returned by `GET /users/me`.
pub const USER: &str = "user";
/// JSON product array.
pub const PRODUCTS: &str = "gymunity_products";
/// JSON array of legacy local accounts.
pub const LOCAL_USERS: &str = "gymunity_users";
/// JSON legacy local account, or `null`.
pub const LOCAL_CURRENT_USER: &str = "gymunity_current_user";

/// Used in per-user keys when no user is known.
pub const ANONYMOUS_USER: &str = "unknown";

/// AI coach message history for one user.
pub fn ai_chat_history(user_id: &str) -> String {
    format!("ai_chat_user_{user_id}")
}

/// AI coach workout context for one user.
pub fn ai_chat_context(user_id: &str) -> String {
    format!("ai_chat_context_user_{user_id}")
}
