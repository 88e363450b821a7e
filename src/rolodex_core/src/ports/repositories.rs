use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    session::{NewRefreshSession, RefreshSession},
    user::{NewUser, PasswordDigest, User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user and returns the id the store assigned to it.
    ///
    /// Fails with [`UserStoreError::UserAlreadyExists`] when the email is taken.
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError>;

    /// Looks a user up by email and password digest together, so a wrong
    /// email and a wrong password both surface as `UserNotFound`.
    async fn get_by_email_and_digest(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::SessionNotFound, Self::SessionNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: NewRefreshSession) -> Result<RefreshSession, SessionStoreError>;

    async fn get_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError>;

    /// Atomically removes the session holding `token` and returns it.
    ///
    /// Two concurrent calls with the same token must not both succeed.
    async fn take_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError>;

    /// Replaces the session holding `token` with `replacement` in one atomic
    /// step and returns the stored replacement.
    ///
    /// Fails with [`SessionStoreError::SessionNotFound`] when `token` is not
    /// stored, in which case nothing is written. Either both the removal and
    /// the insert happen or neither does.
    async fn rotate(
        &self,
        token: &str,
        replacement: NewRefreshSession,
    ) -> Result<RefreshSession, SessionStoreError>;
}
