//! Upstream client trait definition.

use async_trait::async_trait;
use userdir_core::{Post, User, UserId, UserdirResult};

/// Client for the upstream users/posts source.
///
/// Each method is a single network round trip. Implementations must not
/// retry internally; transient failures surface as
/// [`UserdirError::Upstream`](userdir_core::UserdirError::Upstream) or
/// [`UserdirError::Timeout`](userdir_core::UserdirError::Timeout).
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetches the full current user collection.
    async fn fetch_users(&self) -> UserdirResult<Vec<User>>;

    /// Fetches the posts belonging to one user.
    async fn fetch_posts(&self, user_id: UserId) -> UserdirResult<Vec<Post>>;
}
