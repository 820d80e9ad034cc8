//! Restaurant service — use-cases for managing restaurants and their images.

use restohub_domain::error::{NotFoundError, RestoHubError};
use restohub_domain::id::RestaurantId;
use restohub_domain::restaurant::{Restaurant, RestaurantChanges};
use restohub_domain::time;

use crate::ports::{ImageStore, ImageUpload, RestaurantRepository};

fn not_found(id: RestaurantId) -> RestoHubError {
    NotFoundError {
        entity: "Restaurant",
        id: id.to_string(),
    }
    .into()
}

/// Application service for restaurant CRUD operations.
pub struct RestaurantService<R, I> {
    repo: R,
    images: I,
}

impl<R, I> RestaurantService<R, I>
where
    R: RestaurantRepository,
    I: ImageStore,
{
    /// Create a new service backed by the given repository and image store.
    pub fn new(repo: R, images: I) -> Self {
        Self { repo, images }
    }

    /// List all restaurants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestoHubError> {
        self.repo.get_all().await
    }

    /// Look up a restaurant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<Restaurant, RestoHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new restaurant, storing its image first when one is given.
    ///
    /// Invariants are checked before anything is written, so a rejected
    /// request never leaves an image behind.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::Validation`] if invariants fail, or a
    /// storage error from the image store or the repository.
    #[tracing::instrument(skip(self, restaurant, image), fields(name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        mut restaurant: Restaurant,
        image: Option<ImageUpload>,
    ) -> Result<Restaurant, RestoHubError> {
        restaurant.validate()?;

        if let Some(upload) = image.filter(|upload| !upload.is_empty()) {
            restaurant.image = Some(self.images.save(upload).await?);
        }

        let created = self.repo.create(restaurant).await?;
        tracing::info!(id = %created.id, "restaurant created");
        Ok(created)
    }

    /// Apply `changes` to an existing restaurant and optionally replace its image.
    ///
    /// The previous image file is removed once the new record is stored.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] when no restaurant with `id` exists,
    /// [`RestoHubError::Validation`] if the result breaks an invariant, or a
    /// storage error.
    #[tracing::instrument(skip(self, changes, image))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        changes: RestaurantChanges,
        image: Option<ImageUpload>,
    ) -> Result<Restaurant, RestoHubError> {
        let mut restaurant = self.get_restaurant(id).await?;
        restaurant.apply(changes);
        restaurant.validate()?;

        let mut stored = None;
        let mut replaced = None;
        if let Some(upload) = image.filter(|upload| !upload.is_empty()) {
            let file_name = self.images.save(upload).await?;
            stored = Some(file_name.clone());
            replaced = restaurant.image.replace(file_name);
        }
        restaurant.updated_at = time::now();

        match self.repo.update(restaurant).await {
            Ok(Some(updated)) => {
                if let Some(old) = replaced {
                    self.discard_image(&old).await;
                }
                Ok(updated)
            }
            Ok(None) => {
                if let Some(new) = stored {
                    self.discard_image(&new).await;
                }
                Err(not_found(id))
            }
            Err(err) => {
                if let Some(new) = stored {
                    self.discard_image(&new).await;
                }
                Err(err)
            }
        }
    }

    /// Delete a restaurant by id and return the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::NotFound`] when no restaurant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<Restaurant, RestoHubError> {
        let deleted = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        if let Some(image) = &deleted.image {
            self.discard_image(image).await;
        }
        tracing::info!(%id, "restaurant deleted");
        Ok(deleted)
    }

    async fn discard_image(&self, file_name: &str) {
        if let Err(err) = self.images.remove(file_name).await {
            tracing::warn!(error = %err, file_name, "unable to remove image");
        }
    }
}
