//! Path extractor for restaurant identifiers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use restohub_domain::id::RestaurantId;

use crate::error::ApiError;

/// The `{id}` path segment, parsed as a [`RestaurantId`].
///
/// Runs before any body extractor, so a malformed id is answered with `400`
/// whatever the request body holds.
#[derive(Debug, Clone, Copy)]
pub struct RestaurantPath(pub RestaurantId);

impl<S> FromRequestParts<S> for RestaurantPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(RestaurantId::parse(&raw)?))
    }
}
