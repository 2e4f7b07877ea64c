//! Markup rendering layer.
//!
//! # Modules
//!
//! - [`renderer`]: Entry points (`FilterSection`, `render_filter_section`)
//! - [`components`]: Search box, breadcrumb, category list and selectors
//! - [`viewmodel`]: Display-ready view model types
//! - [`theme`]: CSS class palettes
//! - [`labels`]: Display strings per locale
//!
//! # Example
//!
//! ```rust
//! use filter_section::ui::{FilterSection, Labels, Theme};
//! use filter_section::FilterProps;
//!
//! let section = FilterSection::new(
//!     Theme::from_name("plain").unwrap(),
//!     Labels::from_name("ko").unwrap(),
//! );
//! let html = section.render(&FilterProps::default());
//! assert!(html.contains("전체"));
//! ```

pub mod components;
pub mod labels;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use labels::Labels;
pub use renderer::{render_filter_section, FilterSection};
pub use theme::Theme;
pub use viewmodel::FilterViewModel;
