//! JSON catalog sources.

use crate::catalog::backend::RecordSource;
use crate::catalog::models::{Catalog, CatalogFile};
use crate::domain::error::{FolioError, Result};
use crate::infrastructure::strip_host_prefix;
use std::path::PathBuf;

/// Sample collection shipped with the plugin.
const SAMPLE_CATALOG: &str = include_str!("sample.json");

/// Parses catalog text and validates it.
///
/// # Errors
///
/// Returns [`FolioError::Catalog`] for malformed JSON or invalid records.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(contents)
        .map_err(|e| FolioError::Catalog(format!("failed to parse catalog JSON: {e}")))?;
    let catalog = Catalog::from_file(file)?;

    tracing::debug!(
        records = catalog.records.len(),
        curated_tags = catalog.tags.len(),
        "catalog parsed"
    );

    Ok(catalog)
}

/// Catalog stored as a JSON file.
///
/// The file is read on every [`load`](RecordSource::load); the plugin loads once
/// per session.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl RecordSource for JsonCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_catalog(&contents)
    }

    /// The path as the user wrote it, with the host mount shown as `~`.
    fn describe(&self) -> String {
        strip_host_prefix(&self.file_path.display().to_string())
    }
}

/// The sample catalog compiled into the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl RecordSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();
        parse_catalog(SAMPLE_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}
