//! Directory service implementation.

use crate::directory_service::DirectoryService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use userdir_cache::{Snapshot, SnapshotCache};
use userdir_core::{User, UserId, UserdirError, UserdirResult};
use userdir_upstream::UpstreamClient;

/// Directory service backed by the snapshot cache and the upstream client.
pub struct DirectoryServiceImpl {
    cache: SnapshotCache,
    client: Arc<dyn UpstreamClient>,
}

impl DirectoryServiceImpl {
    /// Creates a new directory service.
    pub fn new(cache: SnapshotCache, client: Arc<dyn UpstreamClient>) -> Self {
        Self { cache, client }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn list_users(&self) -> UserdirResult<Snapshot> {
        debug!("Listing users from snapshot");
        self.cache.snapshot().await
    }

    async fn get_user(&self, id: UserId) -> UserdirResult<User> {
        debug!("Getting user: {}", id);

        let snapshot = self.cache.snapshot().await?;

        // Existence check first: an absent id must not cost a posts fetch.
        let user = snapshot
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| UserdirError::not_found("User", id))?;

        // Enrichment failure fails the whole request; degrading to an
        // unenriched user would hide real upstream outages.
        let posts = self.client.fetch_posts(id).await?;

        Ok(user.with_posts(posts))
    }
}
