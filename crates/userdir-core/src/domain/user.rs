//! User entity.

use crate::Post;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the upstream source.
pub type UserId = u64;

/// A user as served by the upstream source.
///
/// Immutable once constructed. Enrichment produces a new value via
/// [`User::with_posts`] instead of mutating the cached entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Full display name.
    pub name: String,

    /// Unique username.
    pub username: String,

    /// Contact email address.
    pub email: String,

    /// Postal address, when upstream provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Related posts, attached only on enriched single-entity reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

impl User {
    /// Returns an enriched copy of this user with `posts` attached.
    #[must_use]
    pub fn with_posts(&self, posts: Vec<Post>) -> Self {
        Self {
            posts: Some(posts),
            ..self.clone()
        }
    }
}

/// Postal address nested inside a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Some(Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
            }),
            posts: None,
        }
    }

    #[test]
    fn test_posts_omitted_when_absent() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("posts").is_none());
        assert_eq!(json["id"], 1);
        assert_eq!(json["address"]["city"], "Gwenborough");
    }

    #[test]
    fn test_with_posts_does_not_touch_original() {
        let user = sample_user();
        let enriched = user.with_posts(vec![Post {
            user_id: 1,
            id: 10,
            title: "title".to_string(),
            body: "body".to_string(),
        }]);

        assert!(user.posts.is_none());
        assert_eq!(enriched.posts.as_ref().map(Vec::len), Some(1));
        assert_eq!(enriched.id, user.id);
        assert_eq!(enriched.email, user.email);
    }

    #[test]
    fn test_deserializes_upstream_payload() {
        let payload = r#"{
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593",
            "website": "anastasia.net"
        }"#;

        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.username, "Antonette");
        assert!(user.posts.is_none());
    }
}
