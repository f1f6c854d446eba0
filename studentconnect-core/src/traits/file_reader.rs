//! File reader abstract Trait

use std::path::Path;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};

/// Reads the bytes of a user-selected file.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Read the whole file
    ///
    /// # Arguments
    /// * `path` - Selected file
    async fn read(&self, path: &Path) -> CoreResult<Vec<u8>>;
}

/// `tokio::fs` backed reader
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileReader;

#[async_trait]
impl FileReader for TokioFileReader {
    async fn read(&self, path: &Path) -> CoreResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| CoreError::FileReadError(format!("{}: {e}", path.display())))
    }
}
