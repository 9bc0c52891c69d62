use crate::utils::error::Result;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Removes `path` and everything below it. Returns `false` when there was nothing to remove.
    fn remove_all(&self, path: &Path) -> impl std::future::Future<Output = Result<bool>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn links_path(&self) -> &Path;
    fn results_root(&self) -> &Path;
}

/// Presentation hook around slow steps. Must never affect results.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, message: &str);
    fn finish(&self, message: &str);
}

/// Reporter for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&self, _message: &str) {}

    fn finish(&self, _message: &str) {}
}
