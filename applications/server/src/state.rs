/// Shared application state
use std::sync::Arc;
use userbase_core::UserStore;

/// Application state shared across all handlers
///
/// The store handle is the only shared resource; each request borrows a
/// pooled connection from it for the duration of one store call.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
