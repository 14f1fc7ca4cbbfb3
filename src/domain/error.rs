//! Error types for the Folio plugin.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used throughout the plugin. The listing engine itself is infallible;
//! these errors come from catalog loading, theming, configuration and the worker
//! bridge. Contact delivery has its own error type in [`crate::contact`].

use thiserror::Error;

/// The main error type for Folio plugin operations.
///
/// # Examples
///
/// ```
/// use folio::domain::FolioError;
///
/// fn check_catalog(len: usize) -> Result<(), FolioError> {
///     if len == 0 {
///         return Err(FolioError::Catalog("catalog has no records".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_catalog(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// The portfolio catalog is malformed or violates a record invariant
    /// (duplicate id, empty author).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/catalog.json")?)
        }

        let err = read().unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn catalog_error_message_is_prefixed() {
        let err = FolioError::Catalog("duplicate id `7`".to_string());
        assert_eq!(err.to_string(), "Catalog error: duplicate id `7`");
    }
}
