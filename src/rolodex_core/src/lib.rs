pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    audit::{AuditAction, AuditEntity, AuditEvent},
    credentials::{SignInInput, SignUpInput},
    email::Email,
    password::Password,
    session::{NewRefreshSession, RefreshSession, TokenPair},
    user::{NewUser, PasswordDigest, User, UserError, UserId},
    user_name::UserName,
};

pub use error::{AuthError, StorageError};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{AuditSink, AuditSinkError, Authenticator, HashError, PasswordHasher},
};

/// Execution context carried by every auth operation.
pub use tokio_util::sync::CancellationToken;
