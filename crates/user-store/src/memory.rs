use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{NewUser, Result, User, UserId, store::UserStore};

/// In-memory user store.
///
/// Records live in insertion order, which is also id order since ids are
/// handed out under the write lock.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    last_id: Option<UserId>,
}

impl InMemoryUserStore {
    /// Creates a new empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all users. Ids are not reused afterwards.
    pub async fn clear(&self) {
        self.inner.write().await.users.clear();
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    #[tracing::instrument(skip(self, user))]
    async fn save(&self, user: NewUser) -> Result<User> {
        let mut inner = self.inner.write().await;

        let id = inner.last_id.map_or_else(UserId::first, |last| last.next());
        inner.last_id = Some(id);
        let stored = user.into_user(id);
        inner.users.push(stored.clone());

        tracing::debug!(%id, "user saved");
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.inner.read().await.users.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserStoreExt;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryUserStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_assigns_first_id() {
        let store = InMemoryUserStore::new();
        let user = store.save(NewUser::named("Alice")).await.unwrap();

        assert_eq!(user.id, UserId::first());
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(store.find_all().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let store = InMemoryUserStore::new();
        let saved = store
            .save_all(vec![
                NewUser::named("Alice"),
                NewUser::named("Bob"),
                NewUser::named("Carol"),
            ])
            .await
            .unwrap();

        let ids: Vec<i64> = saved.iter().map(|u| u.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn find_by_id_and_exists() {
        let store = InMemoryUserStore::new();
        let bob = store
            .save(NewUser::named("Bob").with_email("bob@example.com"))
            .await
            .unwrap();

        assert_eq!(store.find_by_id(bob.id).await.unwrap(), Some(bob.clone()));
        assert!(store.exists(bob.id).await.unwrap());
        assert!(!store.exists(UserId::new(42)).await.unwrap());
    }

    #[tokio::test]
    async fn ids_not_reused_after_clear() {
        let store = InMemoryUserStore::new();
        store.save(NewUser::named("Alice")).await.unwrap();
        store.clear().await;

        let user = store.save(NewUser::named("Bob")).await.unwrap();
        assert_eq!(user.id, UserId::new(2));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_saves_get_unique_ids() {
        let store = InMemoryUserStore::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save(NewUser::named(format!("user-{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
