//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use restohub_app::ports::{ImageStore, RestaurantRepository};

use crate::state::AppState;

/// URL prefix under which stored images are served.
pub const UPLOADS_PREFIX: &str = "/uploads";

/// HTTP-level settings that are not part of the application state.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Directory served read-only under [`UPLOADS_PREFIX`].
    pub uploads_dir: PathBuf,
    /// Maximum accepted request body size, in bytes.
    pub max_body_bytes: usize,
}

/// Build the top-level axum [`Router`].
///
/// Mounts the restaurant API at the root, the upload directory under
/// [`UPLOADS_PREFIX`], and a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, I>(state: AppState<R, I>, config: &RouterConfig) -> Router
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .nest_service(UPLOADS_PREFIX, ServeDir::new(&config.uploads_dir))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
