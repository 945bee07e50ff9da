//! Interactive browsing session: reads simple commands from stdin and
//! drives the view controller.

use std::io::BufRead;

use anyhow::Result;
use postboard_client::Gateway;
use postboard_engine::ViewController;
use postboard_types::{Comment, Post, PostId, User, UserId};

use crate::console::ConsoleView;

/// Gateway wrapper that caps the number of posts per employee
/// (`--limit`). Everything else passes through.
pub struct LimitGateway<G> {
    inner: G,
    limit: Option<usize>,
}

impl<G> LimitGateway<G> {
    pub fn new(inner: G, limit: Option<usize>) -> Self {
        Self { inner, limit }
    }
}

impl<G: Gateway> Gateway for LimitGateway<G> {
    async fn fetch_users(&self) -> Option<Vec<User>> {
        self.inner.fetch_users().await
    }

    async fn fetch_user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        let posts = self.inner.fetch_user_posts(user_id).await?;
        Some(match self.limit {
            Some(limit) => posts.into_iter().take(limit).collect(),
            None => posts,
        })
    }

    async fn fetch_user(&self, user_id: UserId) -> Option<User> {
        self.inner.fetch_user(user_id).await
    }

    async fn fetch_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        self.inner.fetch_post_comments(post_id).await
    }
}

enum Command {
    Select(UserId),
    Toggle(PostId),
    List,
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "" | "list" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => {
            if let Some(rest) = line.strip_prefix("t ") {
                match rest.parse::<PostId>() {
                    Ok(post_id) => Command::Toggle(post_id),
                    Err(_) => Command::Unknown,
                }
            } else {
                match line.parse::<UserId>() {
                    Ok(user_id) => Command::Select(user_id),
                    Err(_) => Command::Unknown,
                }
            }
        }
    }
}

/// One browsing session over stdin for the lifetime of the process.
pub struct Session<G> {
    controller: ViewController,
    gateway: G,
    view: ConsoleView,
}

impl<G: Gateway> Session<G> {
    pub fn new(controller: ViewController, gateway: G, view: ConsoleView) -> Self {
        Self {
            controller,
            gateway,
            view,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.view.greeting();

        let count = self.controller.init(&self.gateway).await;
        if count == 0 {
            self.view.warn("no employees available");
        }
        self.show();

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle(&line).await {
                break;
            }
        }
        Ok(())
    }

    async fn handle(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Command::Quit => return false,
            Command::Help => self.view.greeting(),
            Command::List => self.show(),
            Command::Select(user_id) => {
                self.view.info("loading posts...");
                self.controller.select_user(&self.gateway, Some(user_id)).await;
                self.show();
            }
            Command::Toggle(post_id) => {
                let button = {
                    let doc = self.controller.document();
                    let doc = doc.lock().unwrap();
                    doc.button_for_post(post_id)
                };
                match button {
                    Some(button) => {
                        self.controller.click(button);
                        self.show();
                    }
                    None => self.view.warn("no such post"),
                }
            }
            Command::Unknown => self.view.warn("unrecognized command, try `help`"),
        }
        true
    }

    fn show(&self) {
        let doc = self.controller.document();
        self.view.show_document(&doc.lock().unwrap());
    }
}
