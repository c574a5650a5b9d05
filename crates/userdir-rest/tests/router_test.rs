//! Router integration tests using the real service over a mocked upstream.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;
use userdir_cache::SnapshotStore;
use userdir_config::ServerConfig;
use userdir_core::{Post, User, UserId, UserdirError, UserdirResult};
use userdir_rest::{create_router, AppState};
use userdir_service::{DirectoryService, DirectoryServiceImpl};
use userdir_upstream::UpstreamClient;

mock! {
    Upstream {}

    #[async_trait]
    impl UpstreamClient for Upstream {
        async fn fetch_users(&self) -> UserdirResult<Vec<User>>;
        async fn fetch_posts(&self, user_id: UserId) -> UserdirResult<Vec<Post>>;
    }
}

fn user(id: u64) -> User {
    User {
        id,
        name: format!("User {}", id),
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        address: None,
        posts: None,
    }
}

fn router_with(users: Option<Vec<User>>, client: MockUpstream) -> axum::Router {
    let store = SnapshotStore::new();
    if let Some(users) = users {
        store.install(users);
    }
    let cache = store.cache();
    let directory: Arc<dyn DirectoryService> =
        Arc::new(DirectoryServiceImpl::new(cache.clone(), Arc::new(client)));
    create_router(AppState::new(directory, cache), &ServerConfig::default())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_users_returns_raw_json_array() {
    let router = router_with(Some(vec![user(1), user(2)]), MockUpstream::new());

    let response = router
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], 1);
    assert!(array[0].get("posts").is_none());
}

#[tokio::test]
async fn get_user_returns_enriched_object() {
    let mut client = MockUpstream::new();
    client.expect_fetch_posts().returning(|id| {
        Ok(vec![Post {
            user_id: id,
            id: 100,
            title: "t".to_string(),
            body: "b".to_string(),
        }])
    });
    let router = router_with(Some(vec![user(1)]), client);

    let response = router
        .oneshot(Request::builder().uri("/users/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["username"], "user1");
    assert_eq!(json["posts"][0]["userId"], 1);
    assert_eq!(json["posts"][0]["id"], 100);
}

#[tokio::test]
async fn absent_user_yields_empty_404() {
    let mut client = MockUpstream::new();
    client.expect_fetch_posts().times(0);
    let router = router_with(Some(vec![user(1), user(2), user(3)]), client);

    let response = router
        .oneshot(Request::builder().uri("/users/99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn enrichment_failure_yields_502_with_error_body() {
    let mut client = MockUpstream::new();
    client
        .expect_fetch_posts()
        .returning(|_| Err(UserdirError::upstream("jsonplaceholder", "503")));
    let router = router_with(Some(vec![user(1)]), client);

    let response = router
        .oneshot(Request::builder().uri("/users/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn readiness_tracks_first_snapshot() {
    let router = router_with(None, MockUpstream::new());
    let response = router
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let router = router_with(Some(vec![user(1)]), MockUpstream::new());
    let response = router
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_and_liveness_respond() {
    let router = router_with(None, MockUpstream::new());
    let response = router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");

    let response = router
        .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
