//! JSON REST API handler modules.

pub mod form;
pub mod path;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use restohub_app::ports::{ImageStore, RestaurantRepository};

use crate::state::AppState;

/// Build the restaurant routes.
pub fn routes<R, I>() -> Router<AppState<R, I>>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/restaurants",
            get(restaurants::list::<R, I>).post(restaurants::create::<R, I>),
        )
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<R, I>)
                .put(restaurants::update::<R, I>)
                .delete(restaurants::delete::<R, I>),
        )
}
