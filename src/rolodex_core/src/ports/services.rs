use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{
    domain::{
        audit::AuditEvent,
        credentials::{SignInInput, SignUpInput},
        session::TokenPair,
        user::{PasswordDigest, User, UserId},
    },
    error::AuthError,
};

// AuditSink port trait and errors
#[derive(Debug, Error)]
pub enum AuditSinkError {
    #[error("Failed to encode audit event: {0}")]
    Encoding(String),
    #[error("Failed to deliver audit event: {0}")]
    Delivery(String),
}

/// Destination for audit events.
///
/// Callers treat delivery as fire-and-forget; implementations make at most
/// one attempt and report failure through the returned error.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn log(&self, event: AuditEvent) -> Result<(), AuditSinkError>;
}

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Invalid hasher configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Deterministic one-way password transform.
///
/// The same plaintext must always produce the same digest for a given
/// service configuration, since sign-in compares digests by equality.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &Secret<String>) -> Result<PasswordDigest, HashError>;
}

/// The session operations the transport layer drives.
#[async_trait]
pub trait Authenticator: Clone + Send + Sync + 'static {
    async fn sign_up(&self, ctx: &CancellationToken, input: SignUpInput)
    -> Result<User, AuthError>;

    async fn sign_in(
        &self,
        ctx: &CancellationToken,
        input: SignInInput,
    ) -> Result<TokenPair, AuthError>;

    /// Exchanges a refresh token for a brand-new token pair.
    async fn refresh_tokens(
        &self,
        ctx: &CancellationToken,
        refresh_token: &str,
    ) -> Result<TokenPair, AuthError>;

    /// Verifies an access token and returns the user id it was issued to.
    fn parse_access_token(&self, token: &str) -> Result<UserId, AuthError>;
}
