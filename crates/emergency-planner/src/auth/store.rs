use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::domain::{SessionRecord, UserAccount};

/// Account storage keyed by normalized e-mail.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, account: UserAccount) -> Result<(), StoreError>;
    async fn fetch(&self, email: &str) -> Result<Option<UserAccount>, StoreError>;
}

/// Session storage keyed by the opaque bearer token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn put(&self, token: &str, session: SessionRecord) -> Result<(), StoreError>;
    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, StoreError>;
    async fn remove(&self, token: &str) -> Result<(), StoreError>;
    /// Drop every session expired at `now`; returns how many were removed.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    accounts: Arc<DashMap<String, UserAccount>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, account: UserAccount) -> Result<(), StoreError> {
        match self.accounts.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn fetch(&self, email: &str) -> Result<Option<UserAccount>, StoreError> {
        Ok(self.accounts.get(email).map(|entry| entry.clone()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryTokenStore {
    sessions: Arc<DashMap<String, SessionRecord>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn put(&self, token: &str, session: SessionRecord) -> Result<(), StoreError> {
        self.sessions.insert(token.to_string(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.sessions.get(token).map(|entry| entry.clone()))
    }

    async fn remove(&self, token: &str) -> Result<(), StoreError> {
        self.sessions.remove(token);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut purged = 0;
        self.sessions.retain(|_, session| {
            let live = !session.is_expired(now);
            if !live {
                purged += 1;
            }
            live
        });
        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::Identity;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> SessionRecord {
        SessionRecord {
            identity: Identity {
                user_id: "u-1".to_string(),
                email: "ada@example.com".to_string(),
            },
            expires_at,
        }
    }

    #[tokio::test]
    async fn purge_drops_only_expired_sessions() {
        let store = InMemoryTokenStore::new();
        let now = Utc::now();
        store
            .put("stale", session(now - Duration::minutes(5)))
            .await
            .expect("put");
        store.put("edge", session(now)).await.expect("put");
        store
            .put("live", session(now + Duration::minutes(5)))
            .await
            .expect("put");

        let purged = store.purge_expired(now).await.expect("purge");

        assert_eq!(purged, 2);
        assert_eq!(store.len(), 1);
        assert!(store.get("live").await.expect("get").is_some());
    }

    #[tokio::test]
    async fn user_insert_reports_conflicts() {
        let store = InMemoryUserStore::new();
        let account = UserAccount {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$10$placeholder".to_string(),
        };

        store.insert(account.clone()).await.expect("first insert");
        assert!(matches!(
            store.insert(account).await,
            Err(StoreError::Conflict)
        ));
        assert!(store
            .fetch("ada@example.com")
            .await
            .expect("fetch")
            .is_some());
    }
}
