use chrono::{DateTime, Utc};

use super::user::UserId;

/// A refresh session that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewRefreshSession {
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Persisted binding between an opaque refresh token and its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSession {
    pub id: i64,
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RefreshSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Access token plus the refresh token that replaces the one the caller held.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub refresh_expires_at: DateTime<Utc>,
}
