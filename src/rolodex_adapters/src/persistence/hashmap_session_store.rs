use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Utc;
use rolodex_core::{NewRefreshSession, RefreshSession, SessionStore, SessionStoreError};

#[derive(Default)]
struct Sessions {
    by_token: HashMap<String, RefreshSession>,
    last_id: i64,
}

/// Process-local refresh session store keyed by token value.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<Sessions>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sessions {
    fn insert(&mut self, session: NewRefreshSession) -> Result<RefreshSession, SessionStoreError> {
        if self.by_token.contains_key(&session.token) {
            return Err(SessionStoreError::UnexpectedError(
                "refresh token already stored".to_string(),
            ));
        }

        self.last_id += 1;
        let now = Utc::now();
        let stored = RefreshSession {
            id: self.last_id,
            user_id: session.user_id,
            token: session.token,
            expires_at: session.expires_at,
            created_at: now,
            updated_at: now,
        };
        self.by_token.insert(stored.token.clone(), stored.clone());
        Ok(stored)
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create(&self, session: NewRefreshSession) -> Result<RefreshSession, SessionStoreError> {
        self.sessions.write().await.insert(session)
    }

    async fn get_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .by_token
            .get(token)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn take_by_token(&self, token: &str) -> Result<RefreshSession, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .by_token
            .remove(token)
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn rotate(
        &self,
        token: &str,
        replacement: NewRefreshSession,
    ) -> Result<RefreshSession, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.by_token.contains_key(token) {
            return Err(SessionStoreError::SessionNotFound);
        }

        let stored = sessions.insert(replacement)?;
        sessions.by_token.remove(token);
        Ok(stored)
    }
}
