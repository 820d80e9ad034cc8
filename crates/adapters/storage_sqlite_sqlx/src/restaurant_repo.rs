//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use restohub_app::ports::RestaurantRepository;
use restohub_domain::error::RestoHubError;
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::Restaurant;
use restohub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = RestaurantId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Restaurant {
            id,
            name: row.try_get("name")?,
            cuisine_type: row.try_get("cuisine_type")?,
            location: row.try_get("location")?,
            image: row.try_get("image")?,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO restaurants (id, name, cuisine_type, location, image, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM restaurants ORDER BY rowid";

const UPDATE: &str = r"
    UPDATE restaurants
    SET name = ?, cuisine_type = ?, location = ?, image = ?, updated_at = ?
    WHERE id = ?
    RETURNING *
";

const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ? RETURNING *";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(restaurant.id.to_string())
                .bind(&restaurant.name)
                .bind(&restaurant.cuisine_type)
                .bind(&restaurant.location)
                .bind(&restaurant.image)
                .bind(restaurant.created_at.to_rfc3339())
                .bind(restaurant.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(restaurant)
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&restaurant.name)
                .bind(&restaurant.cuisine_type)
                .bind(&restaurant.location)
                .bind(&restaurant.image)
                .bind(restaurant.updated_at.to_rfc3339())
                .bind(restaurant.id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, RestoHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteRestaurantRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteRestaurantRepository::new(db.pool().clone())
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::builder()
            .name(name)
            .cuisine_type("Italian")
            .location("Rome")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_restaurant_when_valid() {
        let repo = setup().await;
        let created = repo.create(restaurant("Pasta House")).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_restaurant_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(RestaurantId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_restaurants_in_insertion_order() {
        let repo = setup().await;
        repo.create(restaurant("First")).await.unwrap();
        repo.create(restaurant("Second")).await.unwrap();
        repo.create(restaurant("Third")).await.unwrap();

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn should_update_restaurant_when_exists() {
        let repo = setup().await;
        let mut stored = repo.create(restaurant("Pasta House")).await.unwrap();

        stored.location = "Milan".to_string();
        stored.image = Some("1700000000000-0a1b2c3d.jpg".to_string());
        let updated = repo.update(stored.clone()).await.unwrap().unwrap();

        assert_eq!(updated, stored);
        let fetched = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.location, "Milan");
        assert_eq!(fetched.image.as_deref(), Some("1700000000000-0a1b2c3d.jpg"));
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_restaurant() {
        let repo = setup().await;
        let result = repo.update(restaurant("Ghost")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delete_restaurant_and_return_it() {
        let repo = setup().await;
        let created = repo.create(restaurant("Pasta House")).await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, created.id);

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(repo.delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_reject_blank_required_field_at_storage_layer() {
        let repo = setup().await;
        let mut invalid = restaurant("Pasta House");
        invalid.location = "  ".to_string();

        let result = repo.create(invalid).await;
        assert!(matches!(result, Err(RestoHubError::Storage(_))));
    }
}
