//! Reqwest-based upstream client.

use crate::client::UpstreamClient;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};
use userdir_config::UpstreamConfig;
use userdir_core::{Post, User, UserId, UserdirError, UserdirResult};

const SERVICE: &str = "jsonplaceholder";

/// HTTP client for the upstream users/posts source.
pub struct HttpUpstreamClient {
    client: Client,
    base_url: String,
}

impl HttpUpstreamClient {
    /// Creates a new upstream client from configuration.
    pub fn new(config: &UpstreamConfig) -> UserdirResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.response_timeout())
            .build()
            .map_err(|e| UserdirError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a new upstream client with a pre-built reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues one GET and decodes the JSON body.
    ///
    /// Logs one line per call with method, target, and outcome, matching
    /// what the refresh loop and enrichment path expect for diagnostics.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> UserdirResult<T> {
        let url = self.url(path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "upstream", method = "GET", url = %url, error = %e, "Upstream call failed");
                map_transport_error(&e)
            })?;

        let status = response.status();
        info!(target: "upstream", method = "GET", url = %url, status = %status.as_u16(), "Upstream call completed");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UserdirError::upstream(
                SERVICE,
                format!("HTTP {}: {}", status.as_u16(), body),
            ));
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                UserdirError::timeout(e.to_string())
            } else {
                UserdirError::Decode(e.to_string())
            }
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch_users(&self) -> UserdirResult<Vec<User>> {
        self.get_json("/users", &[]).await
    }

    async fn fetch_posts(&self, user_id: UserId) -> UserdirResult<Vec<Post>> {
        self.get_json("/posts", &[("userId", user_id.to_string())])
            .await
    }
}

fn map_transport_error(err: &reqwest::Error) -> UserdirError {
    if err.is_timeout() {
        UserdirError::timeout(err.to_string())
    } else {
        UserdirError::upstream(SERVICE, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let client = HttpUpstreamClient::with_client(Client::new(), "http://localhost:3000");
        assert_eq!(client.url("/users"), "http://localhost:3000/users");

        let client_trailing = HttpUpstreamClient::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(client_trailing.url("/users"), "http://localhost:3000/users");
    }
}
