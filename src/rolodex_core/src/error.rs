use thiserror::Error;

use crate::{
    domain::user::UserError,
    ports::{
        repositories::{SessionStoreError, UserStoreError},
        services::HashError,
    },
};

/// Collaborator failures wrapped opaquely for the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    User(#[from] UserStoreError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Every way an auth operation can fail.
///
/// `Unauthorized` deliberately collapses all token verification failures
/// into one kind.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] UserError),

    #[error("User not found")]
    NotFoundUser,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Unknown refresh token")]
    UnknownRefreshToken,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StorageError),

    #[error("Hashing failure: {0}")]
    HashingFailure(#[from] HashError),

    #[error("Failed to issue token: {0}")]
    TokenIssuance(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl AuthError {
    /// True when the user store rejected a duplicate email.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            AuthError::StorageFailure(StorageError::User(UserStoreError::UserAlreadyExists))
        )
    }
}

impl From<UserStoreError> for AuthError {
    fn from(error: UserStoreError) -> Self {
        AuthError::StorageFailure(error.into())
    }
}

impl From<SessionStoreError> for AuthError {
    fn from(error: SessionStoreError) -> Self {
        AuthError::StorageFailure(error.into())
    }
}
