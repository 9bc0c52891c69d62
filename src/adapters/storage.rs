use crate::domain::ports::Storage;
use crate::utils::error::{OracleError, Result};
use std::path::Path;

/// Filesystem-backed storage. Paths are used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| OracleError::WriteError {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, data)
            .await
            .map_err(|source| OracleError::WriteError {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn remove_all(&self, path: &Path) -> Result<bool> {
        let write_error = |source| OracleError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        if !tokio::fs::try_exists(path).await.map_err(write_error)? {
            return Ok(false);
        }

        tokio::fs::remove_dir_all(path).await.map_err(write_error)?;
        Ok(true)
    }
}
