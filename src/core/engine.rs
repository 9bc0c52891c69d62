use crate::config::links::ConfigStore;
use crate::core::writer::ResultWriter;
use crate::core::{report, resolver, summary};
use crate::domain::model::{Command, LinkTemplate};
use crate::domain::ports::{ConfigProvider, ProgressReporter, Storage};
use crate::utils::error::Result;
use chrono::Local;
use std::path::PathBuf;

/// What a command left behind on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Report files written, results file first.
    Written(Vec<PathBuf>),
    /// The results root existed and was removed.
    Purged(PathBuf),
    /// There was no results root to remove.
    NothingToPurge(PathBuf),
}

pub struct OracleEngine<S: Storage, P: ProgressReporter> {
    links: ConfigStore,
    writer: ResultWriter<S>,
    progress: P,
}

impl<S: Storage, P: ProgressReporter> OracleEngine<S, P> {
    pub fn new<C: ConfigProvider>(config: &C, storage: S, progress: P) -> Self {
        Self {
            links: ConfigStore::new(config.links_path()),
            writer: ResultWriter::new(storage, config.results_root()),
            progress,
        }
    }

    pub fn links(&self) -> &ConfigStore {
        &self.links
    }

    pub async fn run(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Find { name } => self.find(&name).await.map(Outcome::Written),
            Command::Summary { name } => self.summary(&name).await.map(Outcome::Written),
            Command::Delete => self.delete().await,
        }
    }

    /// Resolves `name` and writes the results report.
    pub async fn find(&self, name: &str) -> Result<Vec<PathBuf>> {
        self.generate(name, false).await
    }

    /// Resolves `name` and writes the results and summary reports.
    pub async fn summary(&self, name: &str) -> Result<Vec<PathBuf>> {
        self.generate(name, true).await
    }

    pub async fn delete(&self) -> Result<Outcome> {
        let root = self.writer.root().to_path_buf();
        if self.writer.purge().await? {
            tracing::info!("Removed {}", root.display());
            Ok(Outcome::Purged(root))
        } else {
            tracing::info!("{} does not exist, nothing to delete", root.display());
            Ok(Outcome::NothingToPurge(root))
        }
    }

    fn templates(&self) -> Result<&[LinkTemplate]> {
        if self.links.is_loaded() {
            return self.links.load();
        }

        self.progress.start("Generating");
        let loaded = self.links.load();
        self.progress.finish("Finished Generating");
        loaded
    }

    async fn generate(&self, name: &str, with_summary: bool) -> Result<Vec<PathBuf>> {
        let templates = self.templates()?;
        let now = Local::now();

        let results = resolver::resolve(name, templates);
        tracing::info!("Resolved {} links for '{}'", results.len(), name);

        let mut written = Vec::with_capacity(2);
        let results_report = report::format_results(&results);
        written.push(self.writer.write_results(name, &results_report, &now).await?);

        if with_summary {
            let counts = summary::aggregate(&results);
            let summary_report = report::format_summary(&counts, results.len());
            written.push(self.writer.write_summary(name, &summary_report, &now).await?);
        }

        Ok(written)
    }
}
