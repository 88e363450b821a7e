use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::{email::Email, user_name::UserName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hex-encoded output of the password hasher.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_digest: PasswordDigest,
    pub registered_at: DateTime<Utc>,
}

/// A persisted user record.
///
/// The password digest never leaves the core: it is skipped during
/// serialisation and only reachable through [`User::password_digest`].
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    #[serde(skip)]
    password_digest: PasswordDigest,
    pub registered_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        new_user: NewUser,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password_digest: new_user.password_digest,
            registered_at: new_user.registered_at,
            created_at,
            updated_at,
        }
    }

    /// The record a store holds right after inserting `new_user`: stores write
    /// `registered_at` into both `created_at` and `updated_at`.
    pub fn registered(id: UserId, new_user: NewUser) -> Self {
        let at = new_user.registered_at;
        Self::new(id, new_user, at, at)
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }
}
