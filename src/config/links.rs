use crate::domain::model::{LinkTemplate, LinksDocument};
use crate::utils::error::{OracleError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_placeholder, Validate, ValidationResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Load-once holder for the link templates.
///
/// The file is read on the first successful [`ConfigStore::load`]; later calls
/// hand back the cached list without touching the filesystem. A failed load
/// leaves the store empty so nothing partial is ever observed.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    templates: OnceLock<Vec<LinkTemplate>>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            templates: OnceLock::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.templates.get().is_some()
    }

    pub fn load(&self) -> Result<&[LinkTemplate]> {
        if let Some(templates) = self.templates.get() {
            return Ok(templates.as_slice());
        }

        tracing::debug!("Loading link templates from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => OracleError::ConfigNotFound {
                path: self.path.clone(),
            },
            _ => OracleError::ConfigLoadError {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let document = parse_document(&self.path, &content)?;
        document.validate().map_err(|reason| OracleError::ConfigInvalid {
            path: self.path.clone(),
            reason,
        })?;

        tracing::debug!("Loaded {} link templates", document.social_media_links.len());
        Ok(self
            .templates
            .get_or_init(move || document.social_media_links)
            .as_slice())
    }
}

fn parse_document(path: &Path, content: &str) -> Result<LinksDocument> {
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str::<LinksDocument>(content).map_err(|e| format!("TOML parsing error: {}", e))
    } else {
        serde_json::from_str::<LinksDocument>(content)
            .map_err(|e| format!("JSON parsing error: {}", e))
    };

    parsed.map_err(|reason| OracleError::ConfigInvalid {
        path: path.to_path_buf(),
        reason,
    })
}

impl Validate for LinksDocument {
    fn validate(&self) -> ValidationResult {
        for (index, link) in self.social_media_links.iter().enumerate() {
            validate_non_empty_string(&format!("socialMediaLinks[{}].name", index), &link.name)?;
            validate_placeholder(&format!("socialMediaLinks[{}].url", index), &link.url)?;
        }
        Ok(())
    }
}
