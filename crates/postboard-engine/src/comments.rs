//! Comment sections and their visibility/label toggles.
//!
//! A section and its button are two independent tagged lookups, so the
//! combined [`toggle_comments`] runs both in the same synchronous turn.
//! That is the lock-step invariant: visibility and label can never
//! drift apart.

use postboard_client::Gateway;
use postboard_types::{Comment, PostId};

use crate::dom::{Document, NodeId, SharedDocument};
use crate::element::build_text_element;

pub const SHOW_LABEL: &str = "Show Comments";
pub const HIDE_LABEL: &str = "Hide Comments";

/// Build one detached article per comment, in the order given.
pub fn build_comment_entries(doc: &mut Document, comments: &[Comment]) -> Vec<NodeId> {
    comments
        .iter()
        .map(|comment| {
            let article = doc.create_element("article");
            let title = build_text_element(doc, "h3", &comment.name, None);
            let body = build_text_element(doc, "p", &comment.body, None);
            let email = build_text_element(doc, "p", &format!("From: {}", comment.email), None);
            doc.append(article, title);
            doc.append(article, body);
            doc.append(article, email);
            article
        })
        .collect()
}

/// Wrap already-fetched comments in a hidden, post-tagged section.
/// "No data" comments still produce the (empty) section.
pub fn attach_comment_section(
    doc: &mut Document,
    post_id: PostId,
    comments: Option<&[Comment]>,
) -> NodeId {
    let section = doc.create_element("section");
    doc.set_post_tag(section, post_id);
    doc.add_class(section, "comments");
    doc.set_hidden(section, true);

    if let Some(comments) = comments {
        for entry in build_comment_entries(doc, comments) {
            doc.append(section, entry);
        }
    }
    section
}

/// Fetch a post's comments and build its section, hidden by default.
/// An invalid id yields nothing and issues no fetch. The lock is never
/// held across the fetch.
pub async fn build_comment_section<G: Gateway>(
    doc: &SharedDocument,
    gateway: &G,
    post_id: PostId,
) -> Option<NodeId> {
    if !post_id.is_valid() {
        return None;
    }

    let comments = gateway.fetch_post_comments(post_id).await;
    let mut doc = doc.lock().unwrap();
    Some(attach_comment_section(&mut doc, post_id, comments.as_deref()))
}

/// Flip the visibility of the section tagged with `post_id`.
pub fn toggle_comment_section(doc: &mut Document, post_id: PostId) -> Option<NodeId> {
    if !post_id.is_valid() {
        return None;
    }
    let section = doc.section_for_post(post_id)?;
    let hidden = doc.is_hidden(section);
    doc.set_hidden(section, !hidden);
    Some(section)
}

/// Flip the label of the button tagged with `post_id`.
///
/// The comparison is a literal match on the hide label: any other
/// label, canonical or not, flips to "Hide Comments". The asymmetry is
/// contractual and covered by tests; do not replace it with a two-state
/// flip.
pub fn toggle_comment_button(doc: &mut Document, post_id: PostId) -> Option<NodeId> {
    if !post_id.is_valid() {
        return None;
    }
    let button = doc.button_for_post(post_id)?;
    let next = if doc.text_of(button) == Some(HIDE_LABEL) {
        SHOW_LABEL
    } else {
        HIDE_LABEL
    };
    doc.set_text(button, next);
    Some(button)
}

/// Combined toggle: section first, then button, same synchronous turn.
pub fn toggle_comments(doc: &mut Document, post_id: PostId) -> Option<(NodeId, NodeId)> {
    if !post_id.is_valid() {
        return None;
    }
    let section = toggle_comment_section(doc, post_id);
    let button = toggle_comment_button(doc, post_id);
    match (section, button) {
        (Some(section), Some(button)) => Some((section, button)),
        _ => None,
    }
}
