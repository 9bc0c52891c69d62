use crate::domain::model::Report;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

/// Minute precision: two runs in the same minute overwrite each other.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H-%M";

pub fn query_dir_name(query: &str) -> String {
    format!("Results-{}", query.replace(' ', "_"))
}

pub fn file_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Lays out reports under the results root and hands them to storage.
pub struct ResultWriter<S: Storage> {
    storage: S,
    root: PathBuf,
}

impl<S: Storage> ResultWriter<S> {
    pub fn new(storage: S, root: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn query_dir(&self, query: &str) -> PathBuf {
        self.root.join(query_dir_name(query))
    }

    pub async fn write_results<Tz: TimeZone>(
        &self,
        query: &str,
        report: &Report,
        at: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        self.write_report(query, "Results", report, at).await
    }

    pub async fn write_summary<Tz: TimeZone>(
        &self,
        query: &str,
        report: &Report,
        at: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        self.write_report(query, "Summary", report, at).await
    }

    /// Removes every report under the root. `false` means there was nothing to remove.
    pub async fn purge(&self) -> Result<bool> {
        self.storage.remove_all(&self.root).await
    }

    async fn write_report<Tz: TimeZone>(
        &self,
        query: &str,
        kind: &str,
        report: &Report,
        at: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = self
            .query_dir(query)
            .join(format!("{}-{}.txt", kind, file_timestamp(at)));

        tracing::debug!("Writing {} report ({} bytes) to {}", kind, report.as_bytes().len(), path.display());
        self.storage.write_file(&path, report.as_bytes()).await?;
        Ok(path)
    }
}
