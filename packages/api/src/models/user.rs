//! # User and authentication models
//!
//! ## [`UserInfo`]
//!
//! The record returned by `GET /users/me` and `POST /auth/register`, and the
//! value persisted under the `user` storage key:
//!
//! - `id`: numeric primary key on the backend. Per-user storage keys and
//!   product `sellerId`s use its decimal string form.
//! - `name`, `email`: profile fields from registration.
//! - `role`: a [`Role`]; gates the admin and seller routes.
//! - `created_at`: ISO-8601 timestamp as sent by the backend (kept as text,
//!   the backend does not always include an offset).
//!
//! ## [`Role`]
//!
//! Roles travel as plain strings. Known values decode to their variant;
//! anything else is preserved verbatim in [`Role::Other`] so re-persisting a
//! user never loses information.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Seller,
    Coach,
    User,
    Member,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Seller => "seller",
            Self::Coach => "coach",
            Self::User => "user",
            Self::Member => "member",
            Self::Other(s) => s,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_seller(&self) -> bool {
        matches!(self, Self::Seller)
    }

    /// Role sent at sign-up for a choice on the registration form. Members
    /// are plain users on the backend.
    pub fn from_signup_choice(choice: &str) -> Self {
        match choice {
            "member" => Self::User,
            other => Self::from(other.to_string()),
        }
    }
}

/// Choices offered on the registration form.
pub const SIGNUP_CHOICES: &[(&str, &str)] = &[
    ("member", "Member"),
    ("coach", "Coach"),
    ("seller", "Seller"),
];

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Self::Admin,
            "seller" => Self::Seller,
            "coach" => Self::Coach,
            "user" => Self::User,
            "member" => Self::Member,
            _ => Self::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// The id as used in storage keys and product seller ids.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl RegisterPayload {
    /// Build from the registration form: first and last name are joined.
    pub fn from_form(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        choice: &str,
    ) -> Self {
        Self {
            name: format!("{} {}", first_name.trim(), last_name.trim())
                .trim()
                .to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role: Some(Role::from_signup_choice(choice)),
        }
    }
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
