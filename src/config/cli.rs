use super::{DEFAULT_LINKS_FILE, DEFAULT_RESULTS_DIR};
use crate::domain::model::Command;
use crate::domain::ports::ConfigProvider;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "oracle")]
#[command(about = "Search someone across multiple platforms")]
#[command(after_help = "Examples:\n  oracle find \"Lorem Ipsum\"\n  oracle summary \"Lorem Ipsum\"\n  oracle delete")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Links file with the platform url templates
    #[arg(long, global = true, default_value = DEFAULT_LINKS_FILE)]
    pub config: PathBuf,

    /// Directory that receives the reports
    #[arg(long, global = true, default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Search someone across multiple platforms
    Find {
        /// person to find
        name: String,
    },
    /// Generate a summary report of the findings
    Summary {
        /// person to generate summary for
        name: String,
    },
    /// Deletes the results folder
    Delete,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Find { name } => Command::Find { name },
            CliCommand::Summary { name } => Command::Summary { name },
            CliCommand::Delete => Command::Delete,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn links_path(&self) -> &Path {
        &self.config
    }

    fn results_root(&self) -> &Path {
        &self.results_dir
    }
}
