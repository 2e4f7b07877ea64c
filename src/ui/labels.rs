//! Display strings for the filter control.
//!
//! Every fixed, user-visible string comes from a [`Labels`] set so the control
//! can be rendered in more than one language. Sets are TOML, built in or
//! loaded from a file, the same way themes are.
//!
//! # Built-in Locales
//!
//! - `en`: English (default)
//! - `ko`: Korean
//!
//! The `limit_option` template receives the item count through a `{count}`
//! placeholder.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{FilterError, ItemLimit, Result, SortOrder};

/// Display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    /// Locale name.
    pub name: String,
    /// Root breadcrumb segment ("All").
    pub breadcrumb_root: String,
    /// Text between breadcrumb segments.
    pub breadcrumb_separator: String,
    /// Label in front of the breadcrumb.
    pub category_label: String,
    /// Placeholder shown while categories load.
    pub loading_categories: String,
    /// Placeholder of the empty search field.
    pub search_placeholder: String,
    /// Label of the limit selector.
    pub limit_label: String,
    /// Label of the sort selector.
    pub sort_label: String,
    /// Limit option template, e.g. `"{count} items"`.
    pub limit_option: String,
    /// Sort option labels.
    pub sort: SortLabels,
}

/// One label per [`SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SortLabels {
    /// Label for `price_asc`.
    pub price_asc: String,
    /// Label for `price_desc`.
    pub price_desc: String,
    /// Label for `name_asc`.
    pub name_asc: String,
    /// Label for `name_desc`.
    pub name_desc: String,
}

impl Labels {
    /// Loads a built-in label set by locale name (`en`, `ko`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "en" => include_str!("../../locales/en.toml"),
            "ko" => include_str!("../../locales/ko.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a label set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] if the file cannot be read and
    /// [`FilterError::Labels`] if the content is not a valid label set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| FilterError::Labels(format!("Failed to parse labels TOML: {e}")))
    }

    /// Label of a sort option.
    #[must_use]
    pub fn sort_label(&self, sort: SortOrder) -> &str {
        match sort {
            SortOrder::PriceAsc => &self.sort.price_asc,
            SortOrder::PriceDesc => &self.sort.price_desc,
            SortOrder::NameAsc => &self.sort.name_asc,
            SortOrder::NameDesc => &self.sort.name_desc,
        }
    }

    /// Label of a limit option, with the count substituted.
    #[must_use]
    pub fn limit_label(&self, limit: ItemLimit) -> String {
        self.limit_option.replace("{count}", &limit.count().to_string())
    }
}

impl Default for Labels {
    /// Returns the English label set.
    ///
    /// # Panics
    ///
    /// Panics if the built-in set fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("en").expect("Built-in en labels should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SelectOption;
    use std::io::Write;

    #[test]
    fn english_option_labels() {
        let labels = Labels::default();

        let sort: Vec<_> = SortOrder::ALL.iter().map(|&s| labels.sort_label(s)).collect();
        assert_eq!(sort, ["Price: Low to High", "Price: High to Low", "Name A–Z", "Name Z–A"]);

        let limits: Vec<_> = ItemLimit::ALL.iter().map(|&l| labels.limit_label(l)).collect();
        assert_eq!(limits, ["10 items", "20 items", "50 items", "100 items"]);
    }

    #[test]
    fn korean_labels() {
        let labels = Labels::from_name("ko").unwrap();
        assert_eq!(labels.breadcrumb_root, "전체");
        assert_eq!(labels.limit_label(ItemLimit::Fifty), "50개");
        assert_eq!(labels.sort_label(SortOrder::NameAsc), "이름순");
    }

    #[test]
    fn unknown_locale() {
        assert!(Labels::from_name("fr").is_none());
    }

    #[test]
    fn loads_labels_from_file() {
        let mut custom = Labels::default();
        custom.name = "en-GB".to_string();
        custom.breadcrumb_root = "Everything".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        assert_eq!(Labels::from_file(file.path()).unwrap(), custom);
    }

    #[test]
    fn malformed_labels_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3\n").unwrap();

        assert!(matches!(Labels::from_file(file.path()), Err(FilterError::Labels(_))));
    }
}
