//! Record source for the portfolio collection.
//!
//! The collection is static data loaded once per session: either a JSON file
//! named in the plugin configuration or the sample catalog compiled into the
//! plugin. Loading runs on the worker thread and hands back a validated
//! [`Catalog`].
//!
//! # Modules
//!
//! - `backend`: [`RecordSource`] trait
//! - `json`: JSON file and embedded sources
//! - `models`: catalog file format and validation

pub mod backend;
pub mod json;
pub mod models;

pub use backend::RecordSource;
pub use json::{parse_catalog, EmbeddedCatalog, JsonCatalog};
pub use models::{Catalog, CatalogFile, CATALOG_VERSION};

use std::path::PathBuf;

/// Picks the record source for an optional configured catalog path.
#[must_use]
pub fn source_for(path: Option<&str>) -> Box<dyn RecordSource> {
    match path {
        Some(path) if !path.trim().is_empty() => Box::new(JsonCatalog::new(PathBuf::from(path))),
        _ => Box::new(EmbeddedCatalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_falls_back_to_sample() {
        assert_eq!(source_for(None).describe(), "built-in sample");
        assert_eq!(source_for(Some("  ")).describe(), "built-in sample");
        assert_eq!(source_for(Some("/host/catalog.json")).describe(), "~/catalog.json");
        assert_eq!(source_for(Some("/srv/catalog.json")).describe(), "/srv/catalog.json");
    }
}
