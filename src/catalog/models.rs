//! Catalog file format and the loaded catalog.
//!
//! A catalog file is either a bare JSON array of records or a versioned object
//! that also carries the curated tag menu:
//!
//! ```json
//! {
//!   "version": 1,
//!   "tags": ["React", "Vue", "Svelte"],
//!   "records": [
//!     {
//!       "id": 1,
//!       "author": "Maya Chen",
//!       "description": "Creative developer portfolio",
//!       "techStack": ["React", "GSAP"],
//!       "screenshot": "/screenshots/maya.png",
//!       "liveUrl": "https://maya.dev",
//!       "githubUrl": "https://github.com/maya/site"
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::{FolioError, Result};
use crate::domain::PortfolioRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current catalog format version.
pub const CATALOG_VERSION: u32 = 1;

/// On-disk catalog representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    /// Versioned object with an optional curated tag list.
    Versioned {
        version: u32,
        #[serde(default)]
        tags: Vec<String>,
        records: Vec<PortfolioRecord>,
    },
    /// A plain array of records.
    Records(Vec<PortfolioRecord>),
}

/// A validated record collection plus the tag menu offered for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub records: Vec<PortfolioRecord>,
    /// Curated tag menu; empty when the file does not provide one.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Catalog {
    /// Converts a parsed file into a catalog, enforcing record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Catalog`] when the format version is unsupported,
    /// an author is blank, or two records share an id.
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        let (records, tags) = match file {
            CatalogFile::Versioned { version, tags, records } => {
                if version != CATALOG_VERSION {
                    return Err(FolioError::Catalog(format!(
                        "unsupported catalog version {version}"
                    )));
                }
                (records, tags)
            }
            CatalogFile::Records(records) => (records, Vec::new()),
        };

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.author.trim().is_empty() {
                return Err(FolioError::Catalog(format!(
                    "record `{}` has an empty author",
                    record.id
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(FolioError::Catalog(format!("duplicate record id `{}`", record.id)));
            }
        }

        Ok(Self { records, tags })
    }

    /// Tags offered in the filter menu.
    ///
    /// The curated list when present, otherwise every distinct tech-stack entry
    /// in first-seen order.
    #[must_use]
    pub fn tag_options(&self) -> Vec<String> {
        if !self.tags.is_empty() {
            return self.tags.clone();
        }

        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|r| r.tech_stack.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }
}
