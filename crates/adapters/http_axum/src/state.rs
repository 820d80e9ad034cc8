//! Shared application state for axum handlers.

use std::sync::Arc;

use restohub_app::ports::{ImageStore, RestaurantRepository};
use restohub_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and image store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, I> {
    /// Restaurant CRUD service.
    pub restaurant_service: Arc<RestaurantService<R, I>>,
}

impl<R, I> Clone for AppState<R, I> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
        }
    }
}

impl<R, I> AppState<R, I>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(restaurant_service: RestaurantService<R, I>) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
        }
    }
}
