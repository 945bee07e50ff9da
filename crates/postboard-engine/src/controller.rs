//! Top-level orchestration: select-control population, selection
//! changes, and the render cycle.
//!
//! A render cycle is strictly ordered: disable select → unbind old
//! listeners → clear old content → fetch + render → bind new listeners
//! → re-enable select. The disabled select is the only backpressure; an
//! in-flight cycle cannot be cancelled.

use std::sync::Arc;

use postboard_client::Gateway;
use postboard_types::UserId;

use crate::dom::{NodeId, SharedDocument};
use crate::element::build_select_options;
use crate::listeners::ListenerRegistry;
use crate::posts::render_posts;

/// Controller phase. `Rendered` differs from `Idle` only in that prior
/// content exists to be cleared; there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
}

/// Drives the document for the lifetime of the page: owns the phase,
/// the listener registry, and a handle to the shared document.
pub struct ViewController {
    doc: SharedDocument,
    listeners: ListenerRegistry,
    phase: Phase,
}

impl ViewController {
    pub fn new(doc: SharedDocument) -> Self {
        Self {
            doc,
            listeners: ListenerRegistry::new(),
            phase: Phase::Idle,
        }
    }

    pub fn document(&self) -> SharedDocument {
        Arc::clone(&self.doc)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_listener_count(&self) -> usize {
        self.listeners.active_count()
    }

    /// Page bootstrap: fetch the employees and populate the select
    /// control, one option per employee in fetch order. A failed fetch
    /// leaves the select empty. Returns the number of options added.
    pub async fn init<G: Gateway>(&mut self, gateway: &G) -> usize {
        let users = gateway.fetch_users().await;
        let Some(options) = build_select_options(users.as_deref()) else {
            return 0;
        };

        let mut doc = self.doc.lock().unwrap();
        let select = doc.select();
        for option in &options {
            let node = doc.create_element("option");
            doc.set_text(node, &option.label);
            doc.set_option_value(node, option.value);
            doc.append(select, node);
        }
        options.len()
    }

    /// Selection change: run one full render cycle for the selected
    /// employee. A missing or invalid selection falls back to the first
    /// employee. Returns false if a cycle is already in flight.
    pub async fn select_user<G: Gateway>(&mut self, gateway: &G, value: Option<UserId>) -> bool {
        if self.phase == Phase::Loading {
            return false;
        }
        self.phase = Phase::Loading;

        {
            let mut doc = self.doc.lock().unwrap();
            doc.set_select_disabled(true);
            self.listeners.unbind_toggle_handlers(&doc);
            let main = doc.main();
            doc.clear_children(main);
        }

        let user_id = match value {
            Some(id) if id.is_valid() => id,
            _ => UserId(1),
        };
        let posts = gateway.fetch_user_posts(user_id).await;
        render_posts(&self.doc, gateway, posts.as_deref()).await;

        {
            let mut doc = self.doc.lock().unwrap();
            self.listeners.bind_toggle_handlers(&doc);
            doc.set_select_disabled(false);
        }
        self.phase = Phase::Rendered;
        true
    }

    /// A click on a toggle button, routed through the registry.
    pub fn click(&mut self, button: NodeId) -> Option<(NodeId, NodeId)> {
        let mut doc = self.doc.lock().unwrap();
        self.listeners.dispatch_click(&mut doc, button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::{HIDE_LABEL, SHOW_LABEL};
    use crate::dom::Document;
    use crate::posts::NO_POSTS_TEXT;
    use postboard_testing::fixtures;
    use postboard_testing::gateway::StaticGateway;

    #[tokio::test]
    async fn init_populates_select_in_fetch_order() {
        let mut controller = ViewController::new(Document::shared());
        let world = fixtures::world();
        let gateway = StaticGateway::new(world.clone());

        let count = controller.init(&gateway).await;
        assert_eq!(count, world.users.len());
        assert_eq!(controller.phase(), Phase::Idle);

        let doc = controller.document();
        let doc = doc.lock().unwrap();
        let labels: Vec<_> = doc
            .children_of(doc.select())
            .into_iter()
            .map(|o| doc.text_of(o).unwrap().to_string())
            .collect();
        let expected: Vec<_> = world.users.iter().map(|u| u.name.clone()).collect();
        assert_eq!(labels, expected);
    }

    #[tokio::test]
    async fn failed_user_fetch_leaves_select_empty() {
        let mut controller = ViewController::new(Document::shared());
        let gateway = StaticGateway::new(fixtures::world()).failing_user_list();

        let count = controller.init(&gateway).await;

        assert_eq!(count, 0);
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        assert!(doc.children_of(doc.select()).is_empty());
    }

    #[tokio::test]
    async fn render_cycle_ends_rendered_bound_and_enabled() {
        let mut controller = ViewController::new(Document::shared());
        let world = fixtures::world();
        let gateway = StaticGateway::new(world.clone());
        controller.init(&gateway).await;

        let accepted = controller.select_user(&gateway, Some(UserId(1))).await;

        assert!(accepted);
        assert_eq!(controller.phase(), Phase::Rendered);
        assert_eq!(
            controller.active_listener_count(),
            world.posts[&UserId(1)].len()
        );
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        assert!(!doc.select_disabled());
        assert_eq!(
            doc.children_of(doc.main()).len(),
            world.posts[&UserId(1)].len()
        );
    }

    #[tokio::test]
    async fn second_render_replaces_listeners_not_accumulates() {
        let mut controller = ViewController::new(Document::shared());
        let world = fixtures::world();
        let gateway = StaticGateway::new(world.clone());
        controller.init(&gateway).await;

        controller.select_user(&gateway, Some(UserId(1))).await;
        controller.select_user(&gateway, Some(UserId(2))).await;

        // Exactly B's count, never A + B.
        assert_eq!(
            controller.active_listener_count(),
            world.posts[&UserId(2)].len()
        );
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        assert_eq!(
            doc.buttons_under(doc.main()).len(),
            world.posts[&UserId(2)].len()
        );
    }

    #[tokio::test]
    async fn zero_posts_renders_placeholder_and_reenables() {
        let mut controller = ViewController::new(Document::shared());
        // Employee 3 exists but has no posts in the fixture world.
        let gateway = StaticGateway::new(fixtures::world());

        controller.select_user(&gateway, Some(UserId(3))).await;

        assert_eq!(controller.phase(), Phase::Rendered);
        assert_eq!(controller.active_listener_count(), 0);
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        let children = doc.children_of(doc.main());
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text_of(children[0]), Some(NO_POSTS_TEXT));
        assert!(!doc.select_disabled());
    }

    #[tokio::test]
    async fn failed_post_fetch_degrades_to_placeholder() {
        let mut controller = ViewController::new(Document::shared());
        let gateway = StaticGateway::new(fixtures::world()).failing_posts();

        controller.select_user(&gateway, Some(UserId(1))).await;

        let doc = controller.document();
        let doc = doc.lock().unwrap();
        let children = doc.children_of(doc.main());
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text_of(children[0]), Some(NO_POSTS_TEXT));
        assert!(!doc.select_disabled());
    }

    #[tokio::test]
    async fn missing_selection_falls_back_to_first_employee() {
        let mut controller = ViewController::new(Document::shared());
        let world = fixtures::world();
        let gateway = StaticGateway::new(world.clone());

        controller.select_user(&gateway, None).await;

        assert_eq!(
            controller.active_listener_count(),
            world.posts[&UserId(1)].len()
        );

        let mut controller = ViewController::new(Document::shared());
        controller.select_user(&gateway, Some(UserId(0))).await;
        assert_eq!(
            controller.active_listener_count(),
            world.posts[&UserId(1)].len()
        );
    }

    #[tokio::test]
    async fn select_stays_disabled_for_the_whole_cycle() {
        let mut controller = ViewController::new(Document::shared());
        let shared = controller.document();
        let gateway = StaticGateway::new(fixtures::world()).with_observer(Box::new(move |_| {
            // Fires at every fetch inside the cycle. The controller must
            // not be holding the lock here, and the select must be
            // disabled.
            assert!(shared.lock().unwrap().select_disabled());
        }));

        controller.select_user(&gateway, Some(UserId(1))).await;

        assert!(gateway.calls() > 1);
        let doc = controller.document();
        assert!(!doc.lock().unwrap().select_disabled());
    }

    #[tokio::test]
    async fn clicks_work_after_render_and_stale_buttons_are_dead() {
        let mut controller = ViewController::new(Document::shared());
        let world = fixtures::world();
        let gateway = StaticGateway::new(world.clone());

        controller.select_user(&gateway, Some(UserId(1))).await;
        let first_post = world.posts[&UserId(1)][0].id;
        let button = {
            let doc = controller.document();
            let doc = doc.lock().unwrap();
            doc.button_for_post(first_post).unwrap()
        };

        controller.click(button).unwrap();
        {
            let doc = controller.document();
            let doc = doc.lock().unwrap();
            let section = doc.section_for_post(first_post).unwrap();
            assert!(!doc.is_hidden(section));
            assert_eq!(doc.text_of(button), Some(HIDE_LABEL));
        }

        // Re-render for another employee; the old button is destroyed
        // and its handle must be inert.
        controller.select_user(&gateway, Some(UserId(2))).await;
        assert!(controller.click(button).is_none());

        // The new buttons start from the canonical label.
        let second_post = world.posts[&UserId(2)][0].id;
        let doc = controller.document();
        let new_button = doc.lock().unwrap().button_for_post(second_post).unwrap();
        assert_eq!(doc.lock().unwrap().text_of(new_button), Some(SHOW_LABEL));
    }
}
