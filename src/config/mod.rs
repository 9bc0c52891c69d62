#[cfg(feature = "cli")]
pub mod cli;
pub mod links;

use crate::domain::ports::ConfigProvider;
use std::path::{Path, PathBuf};

pub const DEFAULT_LINKS_FILE: &str = "links.json";
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Locations the engine reads from and writes to.
#[derive(Debug, Clone)]
pub struct Settings {
    pub links_path: PathBuf,
    pub results_root: PathBuf,
}

impl Settings {
    pub fn new(links_path: impl Into<PathBuf>, results_root: impl Into<PathBuf>) -> Self {
        Self {
            links_path: links_path.into(),
            results_root: results_root.into(),
        }
    }
}

impl ConfigProvider for Settings {
    fn links_path(&self) -> &Path {
        &self.links_path
    }

    fn results_root(&self) -> &Path {
        &self.results_root
    }
}
