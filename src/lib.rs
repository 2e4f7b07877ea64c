//! filter-section: a stateless renderer for a product filter control.
//!
//! Given one flat UI-state snapshot the crate produces the complete markup of
//! a product filter:
//! - A search box echoing the current query
//! - A two-level category drill-down with a clickable breadcrumb trail
//! - Item-count and sort selectors with the current choice pre-selected
//!
//! Rendering is a pure function of its input. Event wiring, data loading and
//! state persistence belong to the host page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← JSON in, HTML out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - FilterProps: input contract, boundary validation │
//! │  - FilterState: normalization, view model           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────────────────┐   ┌─────────────────────┐
//! │ UI Layer (ui/)            │   │ Domain (domain/)    │
//! │ - Components (maud)       │   │ - CategoryTree      │
//! │ - Theme (CSS classes)     │   │ - CategoryFocus     │
//! │ - Labels (locales)        │   │ - Sort / limit enums│
//! └───────────────────────────┘   └─────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup, rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Input contract and state projection
//! - [`domain`]: Category tree, drill-down focus, selector enumerations, errors
//! - [`ui`]: Markup components, theming and labels
//! - [`observability`]: Logging setup
//!
//! # Interaction Anchors
//!
//! The rendered markup exposes stable hooks for the host's event layer:
//!
//! | Anchor | Meaning |
//! |--------|---------|
//! | `[data-breadcrumb="reset"]` | clear both category levels |
//! | `[data-breadcrumb="category1"][data-category1]` | keep category1, clear category2 |
//! | `.category1-filter-btn[data-category1]` | select a first-level category |
//! | `.category2-filter-btn[data-category1][data-category2]` | select a second-level category |
//! | `#search-input` | free text |
//! | `#limit-select`, `#sort-select` | selector values |
//!
//! # Examples
//!
//! ```rust
//! use filter_section::{render_filter_section, FilterProps};
//!
//! let props = FilterProps::from_json(r#"{
//!     "categories": {"Electronics": {"Phones": {}, "Laptops": {}}},
//!     "selectedCategory1": "Electronics"
//! }"#)?;
//!
//! let html = render_filter_section(&props);
//! assert!(html.contains(r#"data-category2="Phones""#));
//! # Ok::<(), filter_section::FilterError>(())
//! ```
//!
//! With configuration:
//!
//! ```rust
//! use filter_section::{initialize, Config, FilterProps};
//!
//! let config = Config {
//!     theme_name: Some("plain".to_string()),
//!     locale: Some("ko".to_string()),
//!     ..Default::default()
//! };
//! let section = initialize(&config)?;
//! let html = section.render(&FilterProps::default());
//! assert!(html.contains("filter-section"));
//! # Ok::<(), filter_section::FilterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{FilterProps, FilterState};
pub use domain::{CategoryFocus, CategoryTree, FilterError, ItemLimit, Result, SortOrder};
pub use ui::{render_filter_section, FilterSection, Labels, Theme};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Renderer and logging configuration.
///
/// Loaded from a TOML file or from a flat key/value map. Keys are the same in
/// both forms:
///
/// ```toml
/// theme = "plain"
/// theme_file = "/path/to/theme.toml"
/// locale = "ko"
/// labels_file = "/path/to/labels.toml"
/// trace_level = "debug"
/// log_file = "/var/log/filter-section.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name: `tailwind` (default) or `plain`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Built-in label set: `en` (default) or `ko`. Ignored if `labels_file`
    /// is set.
    pub locale: Option<String>,

    /// Path to a custom TOML label file. Takes precedence over `locale`.
    pub labels_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`, or any `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to this file (rotated) instead of stderr.
    pub log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// Unknown keys are ignored; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use filter_section::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "plain".to_string());
    /// map.insert("locale".to_string(), " ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("plain"));
    /// assert_eq!(config.locale, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            locale: get("locale"),
            labels_file: get("labels_file"),
            trace_level: get("trace_level"),
            log_file: get("log_file"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] if the file cannot be read and
    /// [`FilterError::Config`] on invalid TOML or unknown keys.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Config`] on invalid TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| FilterError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Overlays the set fields of `other` on top of `self`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            theme_name: other.theme_name.or(self.theme_name),
            theme_file: other.theme_file.or(self.theme_file),
            locale: other.locale.or(self.locale),
            labels_file: other.labels_file.or(self.labels_file),
            trace_level: other.trace_level.or(self.trace_level),
            log_file: other.log_file.or(self.log_file),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded or the name is not a built-in theme.
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            tracing::debug!(theme_file = %theme_file, "loading theme from file");
            return Theme::from_file(theme_file);
        }

        self.theme_name.as_ref().map_or_else(
            || Ok(Theme::default()),
            |theme_name| {
                Theme::from_name(theme_name)
                    .ok_or_else(|| FilterError::Theme(format!("unknown built-in theme: {theme_name}")))
            },
        )
    }

    /// Resolves the labels: `labels_file`, then `locale`, then English.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded or the locale is not built in.
    pub fn resolve_labels(&self) -> Result<Labels> {
        if let Some(labels_file) = &self.labels_file {
            tracing::debug!(labels_file = %labels_file, "loading labels from file");
            return Labels::from_file(labels_file);
        }

        self.locale.as_ref().map_or_else(
            || Ok(Labels::default()),
            |locale| {
                Labels::from_name(locale)
                    .ok_or_else(|| FilterError::Labels(format!("unknown built-in locale: {locale}")))
            },
        )
    }
}

/// Builds a configured renderer.
///
/// Does not install a tracing subscriber; call
/// [`observability::init_tracing`] for that.
///
/// # Errors
///
/// Propagates theme and label resolution failures.
pub fn initialize(config: &Config) -> Result<FilterSection> {
    tracing::debug!(?config, "initializing filter section renderer");

    let theme = config.resolve_theme()?;
    let labels = config.resolve_labels()?;

    Ok(FilterSection::new(theme, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_resolve_to_tailwind_english() {
        let section = initialize(&Config::default()).unwrap();
        assert_eq!(section.theme().name, "tailwind");
        assert_eq!(section.labels().name, "en");
    }

    #[test]
    fn unknown_names_are_errors() {
        let theme = Config { theme_name: Some("neon".into()), ..Default::default() };
        assert!(matches!(initialize(&theme), Err(FilterError::Theme(_))));

        let locale = Config { locale: Some("fr".into()), ..Default::default() };
        assert!(matches!(initialize(&locale), Err(FilterError::Labels(_))));
    }

    #[test]
    fn files_take_precedence_over_names() {
        let mut custom = Theme::from_name("plain").unwrap();
        custom.name = "from-file".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("tailwind".into()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(config.resolve_theme().unwrap().name, "from-file");
    }

    #[test]
    fn toml_config() {
        let config = Config::from_toml_str("theme = \"plain\"\nlocale = \"ko\"\ntrace_level = \"debug\"\n").unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("plain"));
        assert_eq!(config.locale.as_deref(), Some("ko"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));

        let err = Config::from_toml_str("colour = \"red\"\n").unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn toml_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"log_file = \"/tmp/filter.log\"\n").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_file.as_deref(), Some("/tmp/filter.log"));
    }

    #[test]
    fn merge_prefers_the_overlay() {
        let base = Config { theme_name: Some("plain".into()), locale: Some("ko".into()), ..Default::default() };
        let overlay = Config { locale: Some("en".into()), ..Default::default() };

        let merged = base.merge(overlay);
        assert_eq!(merged.theme_name.as_deref(), Some("plain"));
        assert_eq!(merged.locale.as_deref(), Some("en"));
    }
}
