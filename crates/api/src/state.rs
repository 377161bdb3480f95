use std::sync::Arc;

use catalog_db::store::ProductStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Product persistence (PostgreSQL or in-memory).
    pub products: Arc<dyn ProductStore>,
}
