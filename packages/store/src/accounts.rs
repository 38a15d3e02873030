//! # Legacy local accounts
//!
//! Before the backend existed the site kept its own account registry in the
//! browser under [`keys::LOCAL_USERS`] / [`keys::LOCAL_CURRENT_USER`]. Those
//! records still exist on returning visitors' machines, so the registry is
//! kept readable and writable here. It is separate from the backend session
//! (`access_token` / `user`) and never grants access to gated routes.
//!
//! Nothing in the running app calls this module: login and registration go
//! through the backend. It is kept, with its tests, so the stored format
//! stays readable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys;
use crate::storage::{KeyValueStore, Storage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalRole {
    Member,
    Coach,
    Seller,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAccount {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: LocalRole,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct NewLocalAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: LocalRole,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum AccountError {
    #[error("Email already registered.")]
    EmailTaken,
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

pub fn load_accounts<S: KeyValueStore>(storage: &Storage<S>) -> Vec<LocalAccount> {
    storage.read_or_default(keys::LOCAL_USERS)
}

pub fn save_accounts<S: KeyValueStore>(storage: &Storage<S>, accounts: &[LocalAccount]) {
    storage.write(keys::LOCAL_USERS, accounts);
}

pub fn current_account<S: KeyValueStore>(storage: &Storage<S>) -> Option<LocalAccount> {
    storage.read(keys::LOCAL_CURRENT_USER, None)
}

pub fn set_current_account<S: KeyValueStore>(storage: &Storage<S>, account: Option<&LocalAccount>) {
    storage.write(keys::LOCAL_CURRENT_USER, &account);
}

/// Add an account (newest first) and make it current.
pub fn register_account<S: KeyValueStore>(
    storage: &Storage<S>,
    new: NewLocalAccount,
    now_millis: u64,
) -> Result<LocalAccount, AccountError> {
    let mut accounts = load_accounts(storage);
    let email = new.email.trim();
    if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
        return Err(AccountError::EmailTaken);
    }

    let account = LocalAccount {
        id: format!("u-{now_millis}"),
        first_name: new.first_name.trim().to_string(),
        last_name: new.last_name.trim().to_string(),
        email: email.to_string(),
        role: new.role,
        password: new.password,
    };
    accounts.insert(0, account.clone());
    save_accounts(storage, &accounts);
    set_current_account(storage, Some(&account));
    Ok(account)
}

/// Match email case-insensitively and password exactly, then make the
/// account current.
pub fn authenticate_account<S: KeyValueStore>(
    storage: &Storage<S>,
    email: &str,
    password: &str,
) -> Result<LocalAccount, AccountError> {
    let account = load_accounts(storage)
        .into_iter()
        .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
        .ok_or(AccountError::InvalidCredentials)?;
    set_current_account(storage, Some(&account));
    Ok(account)
}

pub fn logout_account<S: KeyValueStore>(storage: &Storage<S>) {
    set_current_account(storage, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn new_account(email: &str) -> NewLocalAccount {
        NewLocalAccount {
            first_name: " Sam ".into(),
            last_name: "Lee".into(),
            email: email.into(),
            password: "secret".into(),
            role: LocalRole::Seller,
        }
    }

    #[test]
    fn test_register_and_authenticate() {
        let storage = Storage::new(MemoryStore::new());
        let account = register_account(&storage, new_account("sam@gym.io"), 42).unwrap();
        assert_eq!(account.id, "u-42");
        assert_eq!(account.first_name, "Sam");
        assert_eq!(current_account(&storage), Some(account.clone()));

        logout_account(&storage);
        assert!(current_account(&storage).is_none());

        let found = authenticate_account(&storage, "SAM@gym.io", "secret").unwrap();
        assert_eq!(found, account);
        assert_eq!(
            authenticate_account(&storage, "sam@gym.io", "Secret"),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let storage = Storage::new(MemoryStore::new());
        register_account(&storage, new_account("a@b.com"), 1).unwrap();
        assert_eq!(
            register_account(&storage, new_account("A@B.COM"), 2),
            Err(AccountError::EmailTaken)
        );
        assert_eq!(load_accounts(&storage).len(), 1);
    }

    #[test]
    fn test_newest_first() {
        let storage = Storage::new(MemoryStore::new());
        register_account(&storage, new_account("one@x.io"), 1).unwrap();
        register_account(&storage, new_account("two@x.io"), 2).unwrap();
        let accounts = load_accounts(&storage);
        assert_eq!(accounts[0].email, "two@x.io");
        assert_eq!(accounts[1].email, "one@x.io");
    }

    #[test]
    fn test_malformed_registry_reads_empty() {
        let storage = Storage::new(MemoryStore::new());
        storage.write_raw(keys::LOCAL_USERS, "oops");
        storage.write_raw(keys::LOCAL_CURRENT_USER, "[1]");
        assert!(load_accounts(&storage).is_empty());
        assert!(current_account(&storage).is_none());
    }
}
