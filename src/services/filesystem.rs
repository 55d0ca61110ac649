// Real resource opener for production use
//
// Design Decision: Thin wrapper around tokio::fs::File
//
// This is the "real" adapter for configuration resources. It hands back the
// open file as a boxed AsyncRead; the caller owns it and the file handle is
// closed when the box is dropped.

use super::traits::{ResourceOpener, ResourceStream};
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Opens files from the local filesystem
///
/// Usage:
///     let opener = RealResourceOpener;
///     let stream = opener.open(Path::new("config.json")).await?;
pub struct RealResourceOpener;

#[async_trait]
impl ResourceOpener for RealResourceOpener {
    async fn open(&self, path: &Path) -> Result<ResourceStream> {
        let file = tokio::fs::File::open(path).await?;
        tracing::debug!("Opened resource {:?}", path);
        Ok(Box::new(file))
    }
}
