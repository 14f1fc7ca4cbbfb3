//! Record source abstraction.
//!
//! The listing needs its whole collection up front: there is no partial loading
//! and no paging at the source. [`RecordSource`] is the seam between the worker
//! and wherever the catalog lives.

use crate::catalog::models::Catalog;
use crate::domain::error::Result;

/// Supplies the complete, validated catalog in one call.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): JSON file on disk
/// - [`EmbeddedCatalog`](crate::catalog::EmbeddedCatalog): sample data compiled into the plugin
///
/// # Examples
///
/// ```
/// use folio::catalog::{EmbeddedCatalog, RecordSource};
///
/// let catalog = EmbeddedCatalog.load()?;
/// assert!(!catalog.records.is_empty());
/// # Ok::<(), folio::FolioError>(())
/// ```
pub trait RecordSource: Send {
    /// Loads every record in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or violates record
    /// invariants.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description used in log events.
    fn describe(&self) -> String;
}
