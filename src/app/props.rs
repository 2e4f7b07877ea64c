//! Caller-facing input contract.
//!
//! [`FilterProps`] is the flat state snapshot exactly as the surrounding page
//! holds it. Every field is optional in the serialized form and falls back to
//! its documented default. Shape validation happens here, at the boundary:
//! once a `FilterProps` exists, rendering cannot fail.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{CategoryTree, ItemLimit, Result, SelectOption, SortOrder};

/// Flat filter state snapshot.
///
/// Deserializes from JSON with camelCase keys:
///
/// ```rust
/// use filter_section::FilterProps;
///
/// let props = FilterProps::from_json(r#"{
///     "searchValue": "phone",
///     "categories": {"Electronics": {"Phones": {}}},
///     "selectedCategory1": "Electronics",
///     "selectedLimit": 50
/// }"#).unwrap();
///
/// assert_eq!(props.search_value, "phone");
/// assert_eq!(props.selected_limit, "50");
/// assert_eq!(props.selected_sort, "price_asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterProps {
    /// Free search text.
    #[serde(deserialize_with = "lenient_string")]
    pub search_value: String,

    /// Category tree in list or mapping form.
    pub categories: CategoryTree,

    /// Selected first-level category, empty when none.
    #[serde(deserialize_with = "lenient_string")]
    pub selected_category1: String,

    /// Selected second-level category, empty when none.
    #[serde(deserialize_with = "lenient_string")]
    pub selected_category2: String,

    /// Sort wire value.
    #[serde(deserialize_with = "lenient_string")]
    pub selected_sort: String,

    /// Limit wire value. Accepts a JSON string or number.
    #[serde(deserialize_with = "lenient_string")]
    pub selected_limit: String,

    /// Whether categories are still loading.
    #[serde(deserialize_with = "lenient_bool")]
    pub is_loading: bool,
}

impl Default for FilterProps {
    fn default() -> Self {
        Self {
            search_value: String::new(),
            categories: CategoryTree::new(),
            selected_category1: String::new(),
            selected_category2: String::new(),
            selected_sort: SortOrder::DEFAULT.value().to_string(),
            selected_limit: ItemLimit::DEFAULT.value().to_string(),
            is_loading: false,
        }
    }
}

impl FilterProps {
    /// Parses a JSON state document.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Json`](crate::FilterError::Json) if the input is
    /// not JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON state document from a reader.
    ///
    /// # Errors
    ///
    /// Same as [`from_json`](Self::from_json); I/O failures surface as JSON
    /// errors, as `serde_json` reports them.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, value: impl Into<String>) -> Self {
        self.search_value = value.into();
        self
    }

    /// Sets the category tree.
    #[must_use]
    pub fn with_categories(mut self, categories: CategoryTree) -> Self {
        self.categories = categories;
        self
    }

    /// Sets both selection levels. Pass `""` for "none".
    #[must_use]
    pub fn with_selection(mut self, category1: impl Into<String>, category2: impl Into<String>) -> Self {
        self.selected_category1 = category1.into();
        self.selected_category2 = category2.into();
        self
    }

    /// Sets the sort wire value.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.selected_sort = sort.into();
        self
    }

    /// Sets the limit wire value.
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.selected_limit = limit.into();
        self
    }

    /// Sets the loading flag.
    #[must_use]
    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

/// Strings, numbers and `null` (as empty) are accepted.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            value_kind(&other)
        ))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
