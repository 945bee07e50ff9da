//! View-synchronization engine for the postboard UI.
//!
//! The engine keeps a virtual document tree consistent with the
//! currently selected employee's posts, manages per-post comment
//! visibility and toggle-button labels, and replaces click bindings
//! wholesale on every re-render so none leak or duplicate. It talks to
//! the outside world only through the [`Gateway`] trait, so everything
//! here is testable against scripted data.
//!
//! [`Gateway`]: postboard_client::Gateway

pub mod comments;
pub mod controller;
pub mod dom;
pub mod element;
pub mod listeners;
pub mod posts;

pub use controller::{Phase, ViewController};
pub use dom::{Document, NodeId, SharedDocument};
pub use element::SelectOption;
pub use listeners::ListenerRegistry;
