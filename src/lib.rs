pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::adapters::progress::SpinnerProgress;
#[cfg(feature = "cli")]
pub use crate::config::cli::{CliCommand, CliConfig};

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{links::ConfigStore, Settings};
pub use crate::core::engine::{OracleEngine, Outcome};
pub use crate::domain::model::{Command, LinkTemplate, PlatformCounts, Report, SearchResult};
pub use crate::domain::ports::NoProgress;
pub use crate::utils::error::{OracleError, Result};
