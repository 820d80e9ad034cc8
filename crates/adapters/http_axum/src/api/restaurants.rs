//! JSON REST handlers for restaurants.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use restohub_app::ports::{ImageStore, RestaurantRepository};
use restohub_domain::restaurant::Restaurant;

use crate::api::form::RestaurantForm;
use crate::api::path::RestaurantPath;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Restaurant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update and delete endpoints.
pub enum GetResponse {
    Ok(Json<Restaurant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Restaurant>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /restaurants`
pub async fn list<R, I>(State(state): State<AppState<R, I>>) -> Result<ListResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/:id`
pub async fn get<R, I>(
    State(state): State<AppState<R, I>>,
    RestaurantPath(id): RestaurantPath,
) -> Result<GetResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let restaurant = state.restaurant_service.get_restaurant(id).await?;
    Ok(GetResponse::Ok(Json(restaurant)))
}

/// `POST /restaurants`
pub async fn create<R, I>(
    State(state): State<AppState<R, I>>,
    form: RestaurantForm,
) -> Result<CreateResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let (restaurant, image) = form.into_restaurant()?;
    let created = state
        .restaurant_service
        .create_restaurant(restaurant, image)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /restaurants/:id`
pub async fn update<R, I>(
    State(state): State<AppState<R, I>>,
    RestaurantPath(id): RestaurantPath,
    form: RestaurantForm,
) -> Result<GetResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let (changes, image) = form.into_changes();
    let updated = state
        .restaurant_service
        .update_restaurant(id, changes, image)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /restaurants/:id`
pub async fn delete<R, I>(
    State(state): State<AppState<R, I>>,
    RestaurantPath(id): RestaurantPath,
) -> Result<GetResponse, ApiError>
where
    R: RestaurantRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let deleted = state.restaurant_service.delete_restaurant(id).await?;
    Ok(GetResponse::Ok(Json(deleted)))
}
