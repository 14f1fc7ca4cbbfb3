//! Domain layer for the Folio plugin.
//!
//! Core types independent of Zellij APIs and infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Portfolio record model and sortable columns
//!
//! # Examples
//!
//! ```
//! use folio::domain::{PortfolioRecord, Result};
//!
//! fn featured() -> Result<PortfolioRecord> {
//!     Ok(PortfolioRecord::new("1", "Ada Lovelace", "Notes on the analytical engine")
//!         .with_tech(["Svelte", "TypeScript"]))
//! }
//! # featured().unwrap();
//! ```

pub mod error;
pub mod record;

pub use error::{FolioError, Result};
pub use record::{PortfolioRecord, SortKey};
