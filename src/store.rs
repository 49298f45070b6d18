//! Shared in-memory user store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::user::User;

/// All user records, keyed by id, behind a single reader/writer lock.
///
/// The id counter lives under the same lock as the map, so assigning an id
/// and inserting the record is one critical section. Ids only move forward:
/// deleting a record never frees its id for reuse.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `user` under a freshly assigned id and returns that id.
    ///
    /// Ids start at 1 and increase by one per insert for the life of the
    /// process.
    pub async fn insert(&self, user: User) -> u64 {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.users.insert(id, user);
        id
    }

    /// Looks up a user by id, returning a clone of the record.
    pub async fn get(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// Removes the user with the given id. Returns `false` (and leaves the
    /// store unchanged) if no such id exists.
    pub async fn delete(&self, id: u64) -> bool {
        self.inner.write().await.users.remove(&id).is_some()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}
