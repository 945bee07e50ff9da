//! Click-binding lifecycle across re-renders.
//!
//! The registry retains the exact binding it installed for each toggle
//! button and removes exactly that on unbind; bindings are replaced
//! wholesale every render cycle, never patched. Unbind must run before
//! the old buttons are destroyed — the controller enforces that
//! ordering.

use std::collections::HashMap;

use postboard_types::PostId;

use crate::comments::toggle_comments;
use crate::dom::{Document, NodeId};

/// One installed click binding: the button it was bound to and the post
/// it toggles. At most one exists per post id at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBinding {
    pub post_id: PostId,
    pub button: NodeId,
}

/// Registry of the click bindings currently installed in the document.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bindings: HashMap<PostId, ToggleBinding>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a click handler to every post-tagged button under `main`.
    /// A second bind for the same post replaces the old binding rather
    /// than stacking a duplicate. Returns the buttons bound.
    pub fn bind_toggle_handlers(&mut self, doc: &Document) -> Vec<NodeId> {
        let buttons = doc.buttons_under(doc.main());
        for button in &buttons {
            if let Some(post_id) = doc.get(*button).and_then(|n| n.post_tag) {
                self.bindings.insert(
                    post_id,
                    ToggleBinding {
                        post_id,
                        button: *button,
                    },
                );
            }
        }
        buttons
    }

    /// Remove every binding installed by the previous bind. Returns the
    /// buttons that still exist in the document.
    pub fn unbind_toggle_handlers(&mut self, doc: &Document) -> Vec<NodeId> {
        self.bindings
            .drain()
            .filter_map(|(_, binding)| doc.get(binding.button).map(|_| binding.button))
            .collect()
    }

    /// A click on `button`: if it carries a live binding, run the
    /// combined toggle for its post. Clicks on unbound or destroyed
    /// buttons are ignored.
    pub fn dispatch_click(
        &self,
        doc: &mut Document,
        button: NodeId,
    ) -> Option<(NodeId, NodeId)> {
        let post_id = doc.get(button).and_then(|n| n.post_tag)?;
        let binding = self.bindings.get(&post_id)?;
        if binding.button != button {
            return None;
        }
        toggle_comments(doc, post_id)
    }

    pub fn active_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_bound(&self, post_id: PostId) -> bool {
        self.bindings.contains_key(&post_id)
    }
}
