//! Repository tracker server library.
//!
//! An in-memory REST service that stores repository records (title, url,
//! technologies and a like counter) and exposes CRUD endpoints plus a
//! "like" action.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run};
