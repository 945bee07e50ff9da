//! Scripted gateways for engine and CLI tests.

use std::cell::RefCell;

use postboard_client::Gateway;
use postboard_types::{Comment, Post, PostId, User, UserId};

use crate::fixtures::World;

type Observer = Box<dyn Fn(&str)>;

/// Gateway backed by an in-memory [`World`].
///
/// Honors the normalization contract of the live gateway: invalid ids
/// return `None` before anything is recorded; injected failures return
/// `None` after the call is logged. Calls are logged in order as
/// `users`, `posts:{id}`, `user:{id}` and `comments:{id}`, and an
/// optional observer fires at each logged call (useful for asserting
/// mid-cycle state from a test).
pub struct StaticGateway {
    world: World,
    fail_user_list: bool,
    fail_posts: bool,
    fail_users: bool,
    fail_comments: bool,
    log: RefCell<Vec<String>>,
    observer: Option<Observer>,
}

impl StaticGateway {
    pub fn new(world: World) -> Self {
        Self {
            world,
            fail_user_list: false,
            fail_posts: false,
            fail_users: false,
            fail_comments: false,
            log: RefCell::new(Vec::new()),
            observer: None,
        }
    }

    /// Make `fetch_users` fail.
    pub fn failing_user_list(mut self) -> Self {
        self.fail_user_list = true;
        self
    }

    /// Make `fetch_user_posts` fail.
    pub fn failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    /// Make `fetch_user` (author lookup) fail.
    pub fn failing_users(mut self) -> Self {
        self.fail_users = true;
        self
    }

    /// Make `fetch_post_comments` fail.
    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Number of fetches issued (invalid-id short circuits excluded).
    pub fn calls(&self) -> usize {
        self.log.borrow().len()
    }

    /// The fetches issued so far, in order.
    pub fn call_log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn record(&self, call: String) {
        self.log.borrow_mut().push(call.clone());
        if let Some(observer) = &self.observer {
            observer(&call);
        }
    }
}

impl Gateway for StaticGateway {
    async fn fetch_users(&self) -> Option<Vec<User>> {
        self.record("users".to_string());
        if self.fail_user_list {
            return None;
        }
        Some(self.world.users.clone())
    }

    async fn fetch_user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        if !user_id.is_valid() {
            return None;
        }
        self.record(format!("posts:{}", user_id));
        if self.fail_posts {
            return None;
        }
        Some(self.world.posts.get(&user_id).cloned().unwrap_or_default())
    }

    async fn fetch_user(&self, user_id: UserId) -> Option<User> {
        if !user_id.is_valid() {
            return None;
        }
        self.record(format!("user:{}", user_id));
        if self.fail_users {
            return None;
        }
        self.world.users.iter().find(|u| u.id == user_id).cloned()
    }

    async fn fetch_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        if !post_id.is_valid() {
            return None;
        }
        self.record(format!("comments:{}", post_id));
        if self.fail_comments {
            return None;
        }
        Some(
            self.world
                .comments
                .get(&post_id)
                .cloned()
                .unwrap_or_default(),
        )
    }
}
