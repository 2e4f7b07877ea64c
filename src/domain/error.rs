//! Error types for the filter section renderer.
//!
//! Rendering itself never fails. Every variant here belongs to the boundary:
//! parsing caller input, loading configuration, themes and label sets. All
//! errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// The main error type for filter section operations.
///
/// Most variants carry a human-readable description; I/O and JSON failures
/// wrap the underlying error using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use filter_section::FilterError;
///
/// fn load_theme(name: &str) -> Result<(), FilterError> {
///     Err(FilterError::Theme(format!("unknown built-in theme: {name}")))
/// }
///
/// assert!(load_theme("neon").is_err());
/// ```
#[derive(Debug, Error)]
pub enum FilterError {
    /// Caller input could not be parsed or had the wrong shape.
    ///
    /// Raised by `FilterProps::from_json` when the document is not JSON, or
    /// when a field has the wrong type (for example `categories` that is
    /// neither a list nor a mapping).
    #[error("Invalid filter state: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or stream I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme lookup or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Label set lookup or parsing failed.
    #[error("Labels error: {0}")]
    Labels(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for filter section operations.
pub type Result<T> = std::result::Result<T, FilterError>;
