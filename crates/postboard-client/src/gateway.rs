use postboard_types::{Comment, Post, PostId, User, UserId};

use crate::error::Result;
use crate::http::ApiClient;

/// Data gateway consumed by the view engine.
///
/// `None` means "no data": the caller renders nothing for it and never
/// sees an error. Implementations must not panic on failure.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn fetch_users(&self) -> Option<Vec<User>>;
    async fn fetch_user_posts(&self, user_id: UserId) -> Option<Vec<Post>>;
    async fn fetch_user(&self, user_id: UserId) -> Option<User>;
    async fn fetch_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>>;
}

/// Gateway over the live HTTP API.
///
/// Normalization contract: an invalid (zero) id short-circuits to
/// `None` without issuing a request; any transport or decode failure is
/// reported once on stderr and demoted to `None`. No retries.
pub struct ApiGateway {
    client: ApiClient,
}

impl ApiGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn swallow<T>(operation: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                eprintln!("warning: {} failed: {}", operation, err);
                None
            }
        }
    }
}

impl Gateway for ApiGateway {
    async fn fetch_users(&self) -> Option<Vec<User>> {
        Self::swallow("fetch users", self.client.get_users().await)
    }

    async fn fetch_user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        if !user_id.is_valid() {
            return None;
        }
        Self::swallow("fetch posts", self.client.get_user_posts(user_id).await)
    }

    async fn fetch_user(&self, user_id: UserId) -> Option<User> {
        if !user_id.is_valid() {
            return None;
        }
        Self::swallow("fetch user", self.client.get_user(user_id).await)
    }

    async fn fetch_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        if !post_id.is_valid() {
            return None;
        }
        Self::swallow("fetch comments", self.client.get_post_comments(post_id).await)
    }
}
