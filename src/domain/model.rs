use serde::{Deserialize, Serialize};

/// Token in a template url that is replaced by the encoded query.
pub const PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplate {
    pub name: String,
    pub url: String,
}

impl LinkTemplate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Top-level shape of the links file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksDocument {
    #[serde(rename = "socialMediaLinks")]
    pub social_media_links: Vec<LinkTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub platform: String,
    pub url: String,
}

/// Per-platform result counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformCounts {
    entries: Vec<(String, usize)>,
}

impl PlatformCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, platform: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == platform) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((platform.to_string(), 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rendered report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of operations the tool exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve the name and write the results report.
    Find { name: String },
    /// Resolve the name and write both the results and summary reports.
    Summary { name: String },
    /// Remove every previously written report.
    Delete,
}
