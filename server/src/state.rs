// catalog_server/src/state.rs
use catalog::ProductStore;
use std::sync::Arc;

/// Shared with every handler through `web::Data`. The store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }
}
