//! Image store port — where uploaded restaurant images end up.

use std::future::Future;

use restohub_domain::error::RestoHubError;

/// A file received from a client, fully buffered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename as sent by the client, if any. Only used to derive an extension.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Persistent storage for uploaded images.
pub trait ImageStore {
    /// Persist the upload and resolve to the generated filename under which
    /// it can later be served or removed.
    fn save(&self, upload: ImageUpload)
    -> impl Future<Output = Result<String, RestoHubError>> + Send;

    /// Remove a previously saved image. Removing a missing file succeeds.
    fn remove(&self, file_name: &str) -> impl Future<Output = Result<(), RestoHubError>> + Send;
}
