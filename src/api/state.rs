//! API server state

use std::sync::Arc;

use crate::store::TodoStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Todo repository
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}
