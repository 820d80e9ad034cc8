//! # restohub-adapter-uploads-fs
//!
//! Local filesystem implementation of the `ImageStore` port.
//!
//! ## Responsibilities
//! - Create the upload directory on startup
//! - Write each upload under a generated, timestamp-based filename
//! - Remove images that are no longer referenced
//!
//! The same directory is served read-only by the HTTP adapter under
//! `/uploads`; this crate never serves files itself.
//!
//! ## Dependency rule
//! Depends on `restohub-app` (for the port trait) and `restohub-domain`.

mod error;
mod file_name;
mod store;

pub use error::UploadError;
pub use store::{Config, FsImageStore};
