//! Domain layer for the filter section.
//!
//! Core types independent of markup: the normalized category tree, the
//! drill-down focus, the selector enumerations and the error type.
//!
//! # Organization
//!
//! - [`category`]: `CategoryTree` and `CategoryFocus`
//! - [`options`]: `SortOrder`, `ItemLimit` and the `SelectOption` trait
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use filter_section::domain::{CategoryFocus, CategoryTree};
//!
//! let tree = CategoryTree::from_names(["Books", "Garden"]);
//! let focus = CategoryFocus::from_selection("", "");
//! assert_eq!(focus.depth(), 0);
//! assert_eq!(tree.len(), 2);
//! ```

pub mod category;
pub mod error;
pub mod options;

pub use category::{CategoryFocus, CategoryNode, CategoryTree};
pub use error::{FilterError, Result};
pub use options::{ItemLimit, SelectOption, SortOrder};
