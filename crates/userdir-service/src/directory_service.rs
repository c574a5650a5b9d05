//! Directory service trait definition.

use async_trait::async_trait;
use userdir_cache::Snapshot;
use userdir_core::{User, UserId, UserdirResult};

/// Read facade over the snapshot cache.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Returns the current snapshot of all users.
    ///
    /// Waits for the first successful refresh if the cache is still empty;
    /// never issues a network call itself.
    async fn list_users(&self) -> UserdirResult<Snapshot>;

    /// Returns one user enriched with their posts.
    ///
    /// The posts are fetched fresh from upstream at call time; an absent id
    /// yields `NotFound` without any upstream call.
    async fn get_user(&self, id: UserId) -> UserdirResult<User>;
}
