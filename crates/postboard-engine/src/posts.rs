//! Post-entry assembly for the currently selected employee.
//!
//! Fetches are sequential, one post at a time: an author lookup and a
//! comment fetch per post. That serializes latency but bounds
//! outstanding requests to one, and the disabled select control keeps a
//! second cycle from starting while this one is in flight.

use postboard_client::Gateway;
use postboard_types::{Comment, Post, User};

use crate::comments::{SHOW_LABEL, attach_comment_section};
use crate::dom::{Document, NodeId, SharedDocument};
use crate::element::build_text_element;

/// Placeholder shown when a selection produced no posts.
pub const NO_POSTS_TEXT: &str = "Select an Employee to display their posts.";

fn author_lines(author: Option<&User>) -> (String, String) {
    match author {
        Some(author) => (
            format!("Author: {} with {}", author.name, author.company.name),
            author.company.catch_phrase.clone(),
        ),
        // Author fetch failed mid-render: degrade the two author lines,
        // keep the entry.
        None => ("Author: unknown".to_string(), String::new()),
    }
}

/// Assemble one detached post entry from already-fetched data.
pub fn build_post_entry(
    doc: &mut Document,
    post: &Post,
    author: Option<&User>,
    comments: Option<&[Comment]>,
) -> NodeId {
    let (author_line, catch_phrase) = author_lines(author);

    let article = doc.create_element("article");
    let title = build_text_element(doc, "h2", &post.title, None);
    let body = build_text_element(doc, "p", &post.body, None);
    let id_line = build_text_element(doc, "p", &format!("Post ID: {}", post.id), None);
    let author_el = build_text_element(doc, "p", &author_line, None);
    let phrase_el = build_text_element(doc, "p", &catch_phrase, None);

    let button = doc.create_element("button");
    doc.set_text(button, SHOW_LABEL);
    doc.set_post_tag(button, post.id);

    let section = attach_comment_section(doc, post.id, comments);

    for child in [title, body, id_line, author_el, phrase_el, button, section] {
        doc.append(article, child);
    }
    article
}

/// Build one detached article per post into a detached fragment,
/// fetching author and comments sequentially per post. Returns nothing
/// when there are no posts to build. The lock is never held across a
/// fetch.
pub async fn build_posts<G: Gateway>(
    doc: &SharedDocument,
    gateway: &G,
    posts: Option<&[Post]>,
) -> Option<NodeId> {
    let posts = posts?;
    if posts.is_empty() {
        return None;
    }

    let fragment = doc.lock().unwrap().create_element("fragment");
    for post in posts {
        let author = gateway.fetch_user(post.user_id).await;
        let comments = if post.id.is_valid() {
            gateway.fetch_post_comments(post.id).await
        } else {
            None
        };

        let mut doc = doc.lock().unwrap();
        let entry = build_post_entry(&mut doc, post, author.as_ref(), comments.as_deref());
        doc.append(fragment, entry);
    }
    Some(fragment)
}

/// Build once, branch on the single result: splice the fragment's
/// entries into `main`, or append the placeholder element when there is
/// nothing to show. Returns the node appended last.
pub async fn render_posts<G: Gateway>(
    doc: &SharedDocument,
    gateway: &G,
    posts: Option<&[Post]>,
) -> NodeId {
    let built = build_posts(doc, gateway, posts).await;

    let mut doc = doc.lock().unwrap();
    let main = doc.main();
    match built {
        Some(fragment) => {
            // The fragment wrapper itself never lands in the tree.
            let entries = doc.children_of(fragment);
            let mut last = main;
            for entry in entries {
                doc.append(main, entry);
                last = entry;
            }
            last
        }
        None => {
            let placeholder = build_text_element(&mut doc, "p", NO_POSTS_TEXT, Some("default-text"));
            doc.append(main, placeholder);
            placeholder
        }
    }
}
