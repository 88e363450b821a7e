use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use rolodex_core::{Email, NewUser, PasswordDigest, User, UserId, UserStore, UserStoreError};

/// Process-local user store. Ids start at 1 and are never reused.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new(users.len() as i64 + 1);
        users.insert(user.email.clone(), User::registered(id, user));
        Ok(id)
    }

    async fn get_by_email_and_digest(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .filter(|user| user.password_digest() == digest)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
