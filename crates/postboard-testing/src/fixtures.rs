//! Canned data in the shape the remote API serves.

use std::collections::HashMap;

use postboard_types::{Comment, Company, Post, PostId, User, UserId};

/// In-memory snapshot of the remote data source.
#[derive(Debug, Clone)]
pub struct World {
    pub users: Vec<User>,
    pub posts: HashMap<UserId, Vec<Post>>,
    pub comments: HashMap<PostId, Vec<Comment>>,
}

impl World {
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            posts: HashMap::new(),
            comments: HashMap::new(),
        }
    }
}

fn user(id: u64, name: &str, company: &str, catch_phrase: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: catch_phrase.to_string(),
        },
    }
}

fn post(id: u64, user_id: u64, title: &str) -> Post {
    Post {
        id: PostId(id),
        user_id: UserId(user_id),
        title: title.to_string(),
        body: format!("Body of post {}", id),
    }
}

fn comment(post_id: u64, name: &str, email: &str) -> Comment {
    Comment {
        post_id: PostId(post_id),
        name: name.to_string(),
        body: format!("A comment on post {}", post_id),
        email: email.to_string(),
    }
}

/// The default fixture world: three employees, of which the third has
/// no posts; every post has at least one comment except post 12.
pub fn world() -> World {
    let users = vec![
        user(1, "Leanne Graham", "Romaguera-Crona", "Multi-layered client-server neural-net"),
        user(2, "Ervin Howell", "Deckow-Crist", "Proactive didactic contingency"),
        user(3, "Clementine Bauch", "Romaguera-Jacobson", "Face to face bifurcated interface"),
    ];

    let mut posts = HashMap::new();
    posts.insert(
        UserId(1),
        vec![post(11, 1, "sunt aut facere"), post(12, 1, "qui est esse")],
    );
    posts.insert(
        UserId(2),
        vec![
            post(21, 2, "et ea vero quia"),
            post(22, 2, "in quibusdam tempore"),
            post(23, 2, "voluptatem eligendi optio"),
        ],
    );
    posts.insert(UserId(3), Vec::new());

    let mut comments = HashMap::new();
    comments.insert(
        PostId(11),
        vec![
            comment(11, "id labore ex et quam laborum", "Eliseo@gardner.biz"),
            comment(11, "quo vero reiciendis", "Jayne_Kuhic@sydney.com"),
        ],
    );
    comments.insert(PostId(12), Vec::new());
    comments.insert(PostId(21), vec![comment(21, "alias odio sit", "Lew@alysha.tv")]);
    comments.insert(
        PostId(22),
        vec![comment(22, "vero eaque aliquid", "Hayden@althea.biz")],
    );
    comments.insert(
        PostId(23),
        vec![comment(23, "et fugit eligendi", "Presley.Mueller@myrl.com")],
    );

    World {
        users,
        posts,
        comments,
    }
}
