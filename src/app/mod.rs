//! Application layer: input contract and state projection.
//!
//! This module sits between the caller's flat state snapshot and the markup
//! components. Data flows one way:
//!
//! ```text
//! JSON / caller → FilterProps → FilterState → FilterViewModel → Markup
//!                 (validated)   (normalized)   (display-ready)
//! ```
//!
//! # Modules
//!
//! - [`props`]: `FilterProps`, the caller-facing input with defaults
//! - [`state`]: `FilterState` and view model computation
//!
//! # Example
//!
//! ```rust
//! use filter_section::app::{FilterProps, FilterState};
//! use filter_section::domain::CategoryFocus;
//!
//! let props = FilterProps::default().with_selection("Books", "");
//! let state = FilterState::from_props(&props);
//! assert_eq!(state.focus, CategoryFocus::Category1("Books".to_string()));
//! ```

pub mod props;
pub mod state;

pub use props::FilterProps;
pub use state::{FilterState, LIMIT_SELECT_ID, SORT_SELECT_ID};
