use postboard_types::{Comment, Post, PostId, User, UserId};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Thin typed wrapper over the remote JSON API.
///
/// One method per endpoint; every method returns a `Result` and leaves
/// the degrade-to-nothing policy to the gateway adapter above it.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// `GET /users`
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get_json(&format!("{}/users", self.base_url)).await
    }

    /// `GET /posts?userId={id}`
    pub async fn get_user_posts(&self, user_id: UserId) -> Result<Vec<Post>> {
        self.get_json(&format!("{}/posts?userId={}", self.base_url, user_id))
            .await
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, user_id: UserId) -> Result<User> {
        self.get_json(&format!("{}/users/{}", self.base_url, user_id))
            .await
    }

    /// `GET /posts/{id}/comments`
    pub async fn get_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        self.get_json(&format!("{}/posts/{}/comments", self.base_url, post_id))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::Http)?;

        response.json::<T>().await.map_err(Error::Decode)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_match_the_remote_api() {
        let client = ApiClient::new(ClientConfig {
            base_url: "http://localhost:9000".to_string(),
            timeout: std::time::Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(
            format!("{}/posts?userId={}", client.base_url(), UserId(3)),
            "http://localhost:9000/posts?userId=3"
        );
        assert_eq!(
            format!("{}/posts/{}/comments", client.base_url(), PostId(7)),
            "http://localhost:9000/posts/7/comments"
        );
    }
}
