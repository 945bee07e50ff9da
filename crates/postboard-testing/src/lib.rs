//! Testing infrastructure for postboard.
//!
//! - `fixtures`: a small canned world of employees, posts and comments
//! - `gateway`: scripted [`Gateway`] implementations with failure
//!   injection, call counting and an observation hook
//!
//! [`Gateway`]: postboard_client::Gateway

pub mod fixtures;
pub mod gateway;

pub use fixtures::World;
pub use gateway::StaticGateway;
