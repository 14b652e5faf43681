//! Tasklite - a minimal task-tracking HTTP API backed by SQLite
//!
//! Tasklite exposes a small REST surface for managing todo items:
//! - Create, list, update, and delete todos over JSON/HTTP
//! - Dedicated endpoints for marking a todo ongoing or done
//! - Explicit request validation producing structured field errors
//! - SQLite persistence through plain repository functions

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
