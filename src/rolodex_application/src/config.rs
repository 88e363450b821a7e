use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

pub const DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS: i64 = 15 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_IN_DAYS: i64 = 30;

/// HS256 keys shorter than the digest size weaken the MAC.
pub const MIN_SIGNING_SECRET_LENGTH: usize = 32;

/// What happens to a refresh session once its token has been exchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationPolicy {
    /// The presented session is consumed; replaying its token fails.
    #[default]
    RevokeOnUse,
    /// The presented session stays valid until its own expiry.
    Retain,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("Signing secret must be at least {MIN_SIGNING_SECRET_LENGTH} bytes")]
    WeakSigningSecret,
    #[error("Token lifetime must be positive")]
    NonPositiveTtl,
    #[error("Token lifetime is out of range")]
    TtlOutOfRange,
}

/// Settings the auth service is constructed with. Built once at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    signing_secret: Secret<String>,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    rotation: RotationPolicy,
}

impl AuthConfig {
    pub fn new(signing_secret: Secret<String>) -> Result<Self, AuthConfigError> {
        if signing_secret.expose_secret().len() < MIN_SIGNING_SECRET_LENGTH {
            return Err(AuthConfigError::WeakSigningSecret);
        }

        Ok(Self {
            signing_secret,
            access_token_ttl: Duration::seconds(DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS),
            refresh_token_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_TTL_IN_DAYS),
            rotation: RotationPolicy::default(),
        })
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Result<Self, AuthConfigError> {
        self.access_token_ttl = checked_ttl(ttl)?;
        Ok(self)
    }

    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Result<Self, AuthConfigError> {
        self.refresh_token_ttl = checked_ttl(ttl)?;
        Ok(self)
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn signing_secret(&self) -> &[u8] {
        self.signing_secret.expose_secret().as_bytes()
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }

    pub fn rotation(&self) -> RotationPolicy {
        self.rotation
    }
}

/// A lifetime must be positive and leave a representable expiry instant.
fn checked_ttl(ttl: Duration) -> Result<Duration, AuthConfigError> {
    if ttl <= Duration::zero() {
        return Err(AuthConfigError::NonPositiveTtl);
    }
    if Utc::now().checked_add_signed(ttl).is_none() {
        return Err(AuthConfigError::TtlOutOfRange);
    }
    Ok(ttl)
}
