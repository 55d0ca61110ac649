// Directory-backed uploader
//
// Design Decision: Local directory as the object store
//
// Each key becomes one file directly under the base directory. Keys are flat
// object names, so anything that could escape the directory (separators, a
// bare `.` or `..`) is refused before touching the filesystem. Swapping in a
// real object store means implementing Uploader elsewhere; callers do not
// change.

use super::traits::Uploader;
use crate::error::{Result, SeamsError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Uploader that writes objects into a local directory
///
/// Usage:
///     let uploader = DirectoryUploader::new(PathBuf::from("reports"));
///     uploader.upload("monthly-report.txt", b"Revenue: 1.000000").await?;
pub struct DirectoryUploader {
    base_path: PathBuf,
}

impl DirectoryUploader {
    /// The directory is created on first upload if missing
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf> {
        let dot_segment = key == "." || key == "..";
        if key.is_empty() || dot_segment || key.contains('/') || key.contains('\\') {
            return Err(SeamsError::UploadError(format!("Invalid object key: {:?}", key)));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl Uploader for DirectoryUploader {
    async fn upload(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.object_path(key)?;

        tokio::fs::create_dir_all(&self.base_path).await.map_err(|e| {
            SeamsError::UploadError(format!("Failed to create {:?}: {}", self.base_path, e))
        })?;

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| SeamsError::UploadError(format!("Failed to write {:?}: {}", path, e)))?;

        tracing::info!("Uploaded {} ({} bytes)", key, data.len());
        Ok(())
    }
}
