use std::sync::Arc;

use crate::modules::todos::store::TodoStore;

/// Shared handler state. The store is constructed once at startup and passed
/// by handle, so tests can wire a fresh store per case.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}
