//! End-to-end render cycles: gateway → controller → document.

use postboard_engine::{Document, Phase, ViewController};
use postboard_testing::fixtures;
use postboard_testing::gateway::StaticGateway;
use postboard_types::UserId;

#[tokio::test]
async fn full_session_select_toggle_reselect() {
    let mut controller = ViewController::new(Document::shared());
    let world = fixtures::world();
    let gateway = StaticGateway::new(world.clone());

    // Bootstrap.
    assert_eq!(controller.init(&gateway).await, 3);
    assert_eq!(controller.phase(), Phase::Idle);

    // Select employee 1 and open the first post's comments.
    controller.select_user(&gateway, Some(UserId(1))).await;
    let first_post = world.posts[&UserId(1)][0].id;
    let (button, section) = {
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        (
            doc.button_for_post(first_post).unwrap(),
            doc.section_for_post(first_post).unwrap(),
        )
    };
    controller.click(button).unwrap();
    {
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        assert!(!doc.is_hidden(section));
        assert_eq!(doc.text_of(button), Some("Hide Comments"));
    }

    // Second cycle for employee 2: content and bindings fully replaced.
    controller.select_user(&gateway, Some(UserId(2))).await;
    assert_eq!(
        controller.active_listener_count(),
        world.posts[&UserId(2)].len()
    );
    {
        let doc = controller.document();
        let doc = doc.lock().unwrap();
        assert!(doc.get(button).is_none());
        assert!(doc.section_for_post(first_post).is_none());
        assert!(!doc.select_disabled());
    }
    // The stale button handle is inert.
    assert!(controller.click(button).is_none());
}

#[tokio::test]
async fn every_failure_path_degrades_silently() {
    let world = fixtures::world();

    // Failed post fetch: placeholder, enabled select, no bindings.
    let mut controller = ViewController::new(Document::shared());
    let gateway = StaticGateway::new(world.clone()).failing_posts();
    controller.select_user(&gateway, Some(UserId(1))).await;
    assert_eq!(controller.active_listener_count(), 0);
    assert_eq!(controller.phase(), Phase::Rendered);

    // Failed author and comment fetches: entries render anyway.
    let mut controller = ViewController::new(Document::shared());
    let gateway = StaticGateway::new(world.clone())
        .failing_users()
        .failing_comments();
    controller.select_user(&gateway, Some(UserId(1))).await;
    assert_eq!(
        controller.active_listener_count(),
        world.posts[&UserId(1)].len()
    );
    let doc = controller.document();
    let doc = doc.lock().unwrap();
    for post in &world.posts[&UserId(1)] {
        let section = doc.section_for_post(post.id).unwrap();
        assert!(doc.is_hidden(section));
        assert!(doc.children_of(section).is_empty());
    }
}
