//! Theme management: CSS class palettes for every rendered element.
//!
//! A theme maps each element of the filter control to the class string it is
//! rendered with. Themes are plain TOML, either built in or loaded from a file.
//! The interaction anchor classes (`category1-filter-btn`,
//! `category2-filter-btn`) are not part of a theme; event wiring depends on
//! them.
//!
//! # Built-in Themes
//!
//! - `tailwind`: Tailwind utility classes (default)
//! - `plain`: BEM-style semantic class names for a hand-written stylesheet
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [classes]
//! container = "filters"
//! search_input = "filters__search"
//! category_button_active = "is-active"
//! # ... one entry per field of `ThemeClasses`
//! ```
//!
//! # Example
//!
//! ```rust
//! use filter_section::ui::Theme;
//!
//! let theme = Theme::from_name("plain").unwrap();
//! assert_eq!(theme.classes.select, "filter-select");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{FilterError, Result};

/// Class palette for the filter control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Class strings for all elements.
    pub classes: ThemeClasses,
}

/// Class strings per element. An empty string renders no extra class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeClasses {
    /// Outer container of the whole control.
    pub container: String,
    /// Block holding the search field.
    pub search_section: String,
    /// Positioning wrapper around input and icon.
    pub search_wrapper: String,
    /// The search text input.
    pub search_input: String,
    /// Non-interactive wrapper around the magnifier icon.
    pub search_icon_wrapper: String,
    /// The magnifier SVG.
    pub search_icon: String,

    /// Block holding the category filter and the selector row.
    pub filters: String,
    /// Category filter block.
    pub category_section: String,
    /// Row with the category label and the breadcrumb trail.
    pub breadcrumb_row: String,
    /// Section labels ("Category:", "Items:", "Sort:").
    pub label: String,

    /// Interactive breadcrumb segments.
    pub breadcrumb_link: String,
    /// Separator between breadcrumb segments.
    pub breadcrumb_separator: String,
    /// The final, non-interactive breadcrumb segment.
    pub breadcrumb_current: String,

    /// Container of the category buttons.
    pub category_list: String,
    /// Classes shared by every category button.
    pub category_button: String,
    /// Added to the active category button.
    pub category_button_active: String,
    /// Added to every other category button.
    pub category_button_inactive: String,
    /// Loading placeholder shown instead of the buttons.
    pub loading: String,

    /// Row holding both selectors.
    pub selector_row: String,
    /// Label + select pair.
    pub selector_group: String,
    /// The `<select>` elements.
    pub select: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `tailwind`, `plain`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "tailwind" => include_str!("../../themes/tailwind.toml"),
            "plain" => include_str!("../../themes/plain.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] if the file cannot be read and
    /// [`FilterError::Theme`] if the content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| FilterError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Joins class fragments with single spaces, skipping empty ones.
    ///
    /// ```rust
    /// use filter_section::ui::Theme;
    ///
    /// assert_eq!(Theme::class_list(&["a", "", "b c"]), "a b c");
    /// ```
    #[must_use]
    pub fn class_list(parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Theme {
    /// Returns the default theme (`tailwind`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("tailwind").expect("Built-in tailwind theme should always parse")
    }
}
