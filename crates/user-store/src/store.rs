use async_trait::async_trait;

use crate::{NewUser, Result, User, UserId};

/// Core trait for user store implementations.
///
/// A user store owns the canonical copy of every user record and assigns
/// identities on insert. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user and returns the stored record with its new id.
    ///
    /// Ids are unique and increase with each insert.
    async fn save(&self, user: NewUser) -> Result<User>;

    /// Retrieves every stored user, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Retrieves a single user by id.
    ///
    /// Returns None if no user has that id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Returns the number of stored users.
    async fn count(&self) -> Result<u64>;
}

/// Extension trait providing convenience methods for user stores.
#[async_trait]
pub trait UserStoreExt: UserStore {
    /// Saves several users in order, returning the stored records.
    ///
    /// Not atomic: a failure part-way leaves the earlier inserts in place.
    async fn save_all(&self, users: Vec<NewUser>) -> Result<Vec<User>> {
        let mut saved = Vec::with_capacity(users.len());
        for user in users {
            saved.push(self.save(user).await?);
        }
        Ok(saved)
    }

    /// Checks if a user with the given id exists.
    async fn exists(&self, id: UserId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// Blanket implementation for all UserStore implementations
impl<T: UserStore + ?Sized> UserStoreExt for T {}
