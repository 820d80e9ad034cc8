//! Filesystem-specific error type.

use std::path::PathBuf;

use restohub_domain::error::RestoHubError;

/// Errors originating from the upload directory.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unable to create upload directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to remove image {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The name would resolve outside the upload directory.
    #[error("invalid image name: {0}")]
    InvalidName(String),
}

impl From<UploadError> for RestoHubError {
    fn from(err: UploadError) -> Self {
        Self::Storage(Box::new(err))
    }
}
