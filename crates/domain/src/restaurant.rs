//! Restaurant — the single record type managed by restohub.

use serde::{Deserialize, Serialize};

use crate::error::{RestoHubError, ValidationError};
use crate::id::RestaurantId;
use crate::time::{self, Timestamp};

/// A restaurant listing with an optional uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine_type: String,
    pub location: String,
    /// Stored filename of the uploaded image, relative to the upload directory.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Restaurant {
    /// Create a builder for constructing a [`Restaurant`].
    #[must_use]
    pub fn builder() -> RestaurantBuilder {
        RestaurantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::Validation`] when `name`, `cuisine_type`
    /// or `location` is empty or whitespace only.
    pub fn validate(&self) -> Result<(), RestoHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.cuisine_type.trim().is_empty() {
            return Err(ValidationError::EmptyCuisineType.into());
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyLocation.into());
        }
        Ok(())
    }

    /// Overwrite the fields present in `changes`, leaving the others as-is.
    ///
    /// Does not validate nor touch `updated_at`; callers decide when the
    /// change is committed.
    pub fn apply(&mut self, changes: RestaurantChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(cuisine_type) = changes.cuisine_type {
            self.cuisine_type = cuisine_type;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
    }
}

/// Partial update of a [`Restaurant`]. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantChanges {
    pub name: Option<String>,
    pub cuisine_type: Option<String>,
    pub location: Option<String>,
}

/// Step-by-step builder for [`Restaurant`].
#[derive(Debug, Default)]
pub struct RestaurantBuilder {
    id: Option<RestaurantId>,
    name: Option<String>,
    cuisine_type: Option<String>,
    location: Option<String>,
    image: Option<String>,
    created_at: Option<Timestamp>,
}

impl RestaurantBuilder {
    #[must_use]
    pub fn id(mut self, id: RestaurantId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn cuisine_type(mut self, cuisine_type: impl Into<String>) -> Self {
        self.cuisine_type = Some(cuisine_type.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Restaurant`].
    ///
    /// A fresh id and the current time are used when not provided;
    /// `updated_at` always starts equal to `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::Validation`] if a required field is missing
    /// or empty.
    pub fn build(self) -> Result<Restaurant, RestoHubError> {
        let created_at = self.created_at.unwrap_or_else(time::now);
        let restaurant = Restaurant {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            cuisine_type: self.cuisine_type.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            image: self.image,
            created_at,
            updated_at: created_at,
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}
