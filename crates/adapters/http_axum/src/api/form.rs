//! Create/update request bodies.
//!
//! The same fields are accepted as `multipart/form-data`, urlencoded form or
//! JSON. Only multipart bodies can carry the image, in a single file field
//! named [`IMAGE_FIELD`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderMap, StatusCode, header};
use axum::{Form, Json};
use serde::Deserialize;

use restohub_app::ports::ImageUpload;
use restohub_domain::error::RestoHubError;
use restohub_domain::restaurant::{Restaurant, RestaurantChanges};

use crate::error::ApiError;

/// Multipart field carrying the restaurant image.
pub const IMAGE_FIELD: &str = "image";

/// Restaurant fields as submitted by a client. Every field is optional here;
/// required-field checks happen in the domain.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantForm {
    pub name: Option<String>,
    pub cuisine_type: Option<String>,
    pub location: Option<String>,
    #[serde(skip)]
    pub image: Option<ImageUpload>,
}

impl RestaurantForm {
    /// Turn the form into a new, validated restaurant plus its optional image.
    ///
    /// # Errors
    ///
    /// Returns [`RestoHubError::Validation`] when a required field is missing
    /// or empty.
    pub fn into_restaurant(self) -> Result<(Restaurant, Option<ImageUpload>), RestoHubError> {
        let mut builder = Restaurant::builder();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(cuisine_type) = self.cuisine_type {
            builder = builder.cuisine_type(cuisine_type);
        }
        if let Some(location) = self.location {
            builder = builder.location(location);
        }
        Ok((builder.build()?, self.image))
    }

    /// Turn the form into a partial update plus its optional image.
    #[must_use]
    pub fn into_changes(self) -> (RestaurantChanges, Option<ImageUpload>) {
        let changes = RestaurantChanges {
            name: self.name,
            cuisine_type: self.cuisine_type,
            location: self.location,
        };
        (changes, self.image)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        let mut seen_image = false;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                "name" => form.name = Some(field.text().await?),
                "cuisineType" => form.cuisine_type = Some(field.text().await?),
                "location" => form.location = Some(field.text().await?),
                IMAGE_FIELD if field.file_name().is_some() => {
                    if seen_image {
                        return Err(ApiError::Rejected {
                            status: StatusCode::BAD_REQUEST,
                            message: format!("only one `{IMAGE_FIELD}` file is accepted"),
                        });
                    }
                    seen_image = true;

                    let file_name = field.file_name().map(str::to_owned);
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file was picked.
                    if !bytes.is_empty() {
                        form.image = Some(ImageUpload {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                other => tracing::debug!(field = other, "ignoring unknown multipart field"),
            }
        }

        Ok(form)
    }
}

enum BodyKind {
    Multipart,
    UrlEncoded,
    Json,
    Unspecified,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        else {
            return Self::Unspecified;
        };
        if content_type.starts_with("multipart/form-data") {
            Self::Multipart
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Self::UrlEncoded
        } else {
            Self::Json
        }
    }
}

impl<S> FromRequest<S> for RestaurantForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state).await?;
                Self::from_multipart(multipart).await
            }
            BodyKind::UrlEncoded => {
                let Form(form) = Form::<Self>::from_request(req, state).await?;
                Ok(form)
            }
            BodyKind::Json => {
                let Json(form) = Json::<Self>::from_request(req, state).await?;
                Ok(form)
            }
            // No body at all means no field changes.
            BodyKind::Unspecified => {
                let bytes = Bytes::from_request(req, state).await?;
                if bytes.is_empty() {
                    return Ok(Self::default());
                }
                let Json(form) = Json::<Self>::from_bytes(&bytes)?;
                Ok(form)
            }
        }
    }
}
