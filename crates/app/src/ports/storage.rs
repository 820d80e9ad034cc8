//! Storage port — repository trait for restaurant persistence.

use std::future::Future;

use restohub_domain::error::RestoHubError;
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::Restaurant;

/// Repository for persisting and querying [`Restaurant`]s.
pub trait RestaurantRepository {
    /// Insert a new restaurant.
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send;

    /// Get a restaurant by its unique identifier.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send;

    /// Get all restaurants, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, RestoHubError>> + Send;

    /// Replace every stored field of the restaurant with the same id.
    ///
    /// Resolves to `None` when no such restaurant exists.
    fn update(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send;

    /// Remove a restaurant, resolving to the removed record if there was one.
    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send;
}
