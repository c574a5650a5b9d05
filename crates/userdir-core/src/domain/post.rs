//! Post entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A post belonging to a user, fetched from the secondary upstream endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier of the owning user.
    pub user_id: UserId,

    /// Unique post identifier.
    pub id: u64,

    /// Post title.
    pub title: String,

    /// Post body.
    pub body: String,
}
