//! [`ImageStore`] backed by a local directory.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use restohub_app::ports::{ImageStore, ImageUpload};
use restohub_domain::error::RestoHubError;
use restohub_domain::time;

use crate::error::UploadError;
use crate::file_name;

/// Configuration for the filesystem image store.
pub struct Config {
    /// Directory receiving uploaded images. Created if missing.
    pub directory: PathBuf,
}

impl Config {
    /// Create the upload directory and return a ready store.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::CreateDir`] if the directory cannot be created.
    pub async fn build(self) -> Result<FsImageStore, UploadError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|source| UploadError::CreateDir {
                path: self.directory.clone(),
                source,
            })?;
        Ok(FsImageStore {
            directory: self.directory,
        })
    }
}

/// Stores images as plain files in a single flat directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    directory: PathBuf,
}

impl FsImageStore {
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn resolve(&self, file_name: &str) -> Result<PathBuf, UploadError> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name == "."
            || file_name == ".."
        {
            return Err(UploadError::InvalidName(file_name.to_string()));
        }
        Ok(self.directory.join(file_name))
    }
}

/// Create `path` exclusively and hand it to `write`. A file left incomplete
/// by a failed write is removed before the error is returned.
async fn write_new<F, Fut>(path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(File) -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    if let Err(err) = write(file).await {
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "unable to remove partial image"
            );
        }
        return Err(err);
    }
    Ok(())
}

async fn write_bytes(mut file: File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

impl ImageStore for FsImageStore {
    fn save(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<String, RestoHubError>> + Send {
        let directory = self.directory.clone();
        async move {
            let name = file_name::generate(upload.file_name.as_deref(), time::now());
            let path = directory.join(&name);
            write_new(&path, |file| write_bytes(file, &upload.bytes))
                .await
                .map_err(|source| UploadError::Write {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(
                path = %path.display(),
                size = upload.bytes.len(),
                content_type = upload.content_type.as_deref(),
                "image stored"
            );
            Ok(name)
        }
    }

    fn remove(&self, file_name: &str) -> impl Future<Output = Result<(), RestoHubError>> + Send {
        let path = self.resolve(file_name);
        async move {
            let path = path?;
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "image removed");
                    Ok(())
                }
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(source) => Err(UploadError::Remove { path, source }.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (tempfile::TempDir, FsImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = Config {
            directory: dir.path().join("images"),
        }
        .build()
        .await
        .unwrap();
        (dir, store)
    }

    fn upload(name: &str, bytes: &[u8]) -> ImageUpload {
        ImageUpload {
            file_name: Some(name.to_string()),
            content_type: Some("image/jpeg".to_string()),
            bytes: bytes.to_vec(),
        }
    }

    #[tokio::test]
    async fn should_create_missing_directory() {
        let (_dir, store) = setup().await;
        assert!(store.directory().is_dir());
    }

    #[tokio::test]
    async fn should_write_upload_under_generated_name() {
        let (_dir, store) = setup().await;

        let name = store.save(upload("front.JPG", b"jpeg-bytes")).await.unwrap();

        assert!(name.ends_with(".jpg"));
        assert_ne!(name, "front.JPG");
        let content = tokio::fs::read(store.directory().join(&name)).await.unwrap();
        assert_eq!(content, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn should_not_collide_when_same_file_uploaded_twice() {
        let (_dir, store) = setup().await;

        let first = store.save(upload("logo.png", b"1")).await.unwrap();
        let second = store.save(upload("logo.png", b"2")).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_remove_existing_image() {
        let (_dir, store) = setup().await;
        let name = store.save(upload("logo.png", b"1")).await.unwrap();

        store.remove(&name).await.unwrap();

        assert!(!store.directory().join(&name).exists());
    }

    #[tokio::test]
    async fn should_ignore_removal_of_missing_image() {
        let (_dir, store) = setup().await;
        store.remove("1700000000000-00000000.png").await.unwrap();
    }

    async fn write_then_fail(mut file: File) -> std::io::Result<()> {
        file.write_all(b"half").await?;
        file.flush().await?;
        Err(std::io::Error::other("disk full"))
    }

    #[tokio::test]
    async fn should_discard_partial_file_when_write_fails() {
        let (_dir, store) = setup().await;
        let path = store.directory().join("1700000000000-00000000.png");

        let result = write_new(&path, write_then_fail).await;

        assert_eq!(result.unwrap_err().to_string(), "disk full");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_refuse_names_escaping_directory() {
        let (_dir, store) = setup().await;
        let result = store.remove("../restohub.db").await;
        assert!(matches!(result, Err(RestoHubError::Storage(_))));
    }
}
