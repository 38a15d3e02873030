//! The persisted `(token, user)` pair.
//!
//! [`Session`] is the only code that writes the `access_token` and `user`
//! keys. Every transition goes through one of its methods so the two keys are
//! set and cleared together.

use store::keys;
use store::{KeyValueStore, Storage};

use crate::models::UserInfo;

#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    storage: Storage<S>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(storage: Storage<S>) -> Self {
        Self { storage }
    }

    /// The underlying storage, for features that keep their own keys.
    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.read_raw(keys::ACCESS_TOKEN)
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// The stored user. A malformed record reads as signed out.
    pub fn user(&self) -> Option<UserInfo> {
        self.storage.read::<Option<UserInfo>>(keys::USER, None)
    }

    /// Sign in: store the token and user together.
    pub fn establish(&self, token: &str, user: &UserInfo) {
        self.storage.write_raw(keys::ACCESS_TOKEN, token);
        self.storage.write(keys::USER, user);
        tracing::info!(user_id = user.id, "session established");
    }

    /// Replace the stored user after a fresh identity call. Without a token
    /// there is no session to refresh, so both keys are cleared instead.
    pub fn refresh_user(&self, user: &UserInfo) {
        if self.has_token() {
            self.storage.write(keys::USER, user);
        } else {
            self.clear();
        }
    }

    /// Set or clear the user. Clearing also drops the token.
    pub fn sync_user(&self, user: Option<&UserInfo>) {
        match user {
            Some(user) => self.refresh_user(user),
            None => self.clear(),
        }
    }

    pub fn clear(&self) {
        let had_token = self.has_token();
        self.storage.remove(keys::ACCESS_TOKEN);
        self.storage.remove(keys::USER);
        if had_token {
            tracing::info!("session cleared");
        }
    }

    /// True when token and user are either both present or both absent.
    pub fn is_consistent(&self) -> bool {
        self.has_token() == self.user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Role;
    use crate::testing::{session, user};

    use super::*;

    #[test]
    fn test_establish_and_clear() {
        let session = session();
        assert!(!session.has_token());
        assert!(session.is_consistent());

        session.establish("tok", &user(7, Role::User));
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.user().map(|u| u.id), Some(7));
        assert!(session.is_consistent());

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_refresh_without_token_clears() {
        let session = session();
        session.storage().write(keys::USER, &user(1, Role::User));
        session.refresh_user(&user(1, Role::Admin));
        assert!(session.user().is_none());
        assert!(session.is_consistent());
    }

    #[test]
    fn test_sync_user() {
        let session = session();
        session.establish("tok", &user(1, Role::User));
        session.sync_user(Some(&user(1, Role::Seller)));
        assert_eq!(session.user().map(|u| u.role), Some(Role::Seller));

        session.sync_user(None);
        assert!(!session.has_token());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_malformed_user_reads_as_none() {
        let session = session();
        session.storage().write_raw(keys::USER, "{not json");
        assert!(session.user().is_none());
    }
}
