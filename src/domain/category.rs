//! Category tree and drill-down focus.
//!
//! Callers hand over categories either as a plain ordered list of first-level
//! names or as a mapping from first-level name to a mapping of second-level
//! names. Both shapes are normalized here into one [`CategoryTree`] so the
//! renderer never branches on the input representation.
//!
//! The current drill-down depth is an explicit [`CategoryFocus`] instead of a
//! pair of possibly-empty strings.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A first-level category with its second-level names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// First-level category name.
    pub name: String,
    /// Second-level names in their natural order. Empty when the input gave no
    /// mapping for this category.
    pub children: Vec<String>,
}

/// Canonical two-level category tree.
///
/// Entries keep the order they had in the caller's input: list order for the
/// list form, key insertion order for the mapping form.
///
/// # Example
///
/// ```
/// use filter_section::domain::CategoryTree;
///
/// let tree = CategoryTree::from_entries([("Electronics", vec!["Phones", "Laptops"])]);
/// assert_eq!(tree.first_level().collect::<Vec<_>>(), ["Electronics"]);
/// assert_eq!(tree.children("Electronics").unwrap(), ["Phones", "Laptops"]);
/// assert!(tree.children("Books").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
}

impl CategoryTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Builds a tree of first-level names only (the list form).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new();
        for name in names {
            tree.push(name.into(), Vec::new());
        }
        tree
    }

    /// Builds a tree from `(first_level, second_level_names)` entries.
    pub fn from_entries<I, S, C, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tree = Self::new();
        for (name, children) in entries {
            let children = children
                .into_iter()
                .map(Into::into)
                .filter(|child: &String| !child.is_empty())
                .collect();
            tree.push(name.into(), children);
        }
        tree
    }

    /// Normalizes the mapping form.
    ///
    /// A first-level value that is a mapping contributes its keys as
    /// second-level names. Any other value (list, string, null) contributes no
    /// children. Empty keys are dropped at both levels.
    #[must_use]
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut tree = Self::new();
        for (name, value) in map {
            let children = match value {
                Value::Object(sub) => sub
                    .keys()
                    .filter(|key| {
                        if key.is_empty() {
                            tracing::debug!(category1 = %name, "dropping empty second-level category key");
                        }
                        !key.is_empty()
                    })
                    .cloned()
                    .collect(),
                _ => Vec::new(),
            };
            tree.push(name.clone(), children);
        }
        tree
    }

    fn push(&mut self, name: String, children: Vec<String>) {
        if name.is_empty() {
            tracing::debug!("dropping empty first-level category key");
            return;
        }
        self.nodes.push(CategoryNode { name, children });
    }

    /// Iterates first-level names in natural order.
    pub fn first_level(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.name.as_str())
    }

    /// Returns the second-level names under `category1`, or `None` when the
    /// tree has no such first-level entry.
    #[must_use]
    pub fn children(&self, category1: &str) -> Option<&[String]> {
        self.nodes
            .iter()
            .find(|node| node.name == category1)
            .map(|node| node.children.as_slice())
    }

    /// All nodes in natural order.
    #[must_use]
    pub fn nodes(&self) -> &[CategoryNode] {
        &self.nodes
    }

    /// Number of first-level categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no first-level categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The two accepted input shapes. `null` maps to an empty tree.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategories {
    List(Vec<String>),
    Map(Map<String, Value>),
}

impl<'de> Deserialize<'de> for CategoryTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawCategories>::deserialize(deserializer).map_err(|_| {
            serde::de::Error::custom(
                "categories must be a list of names or a mapping of name to sub-categories",
            )
        })?;

        Ok(match raw {
            None => Self::new(),
            Some(RawCategories::List(names)) => Self::from_names(names),
            Some(RawCategories::Map(map)) => Self::from_json_map(&map),
        })
    }
}

/// Current position in the two-level drill-down.
///
/// # Example
///
/// ```
/// use filter_section::domain::CategoryFocus;
///
/// assert_eq!(CategoryFocus::from_selection("", "Phones"), CategoryFocus::Root);
/// assert_eq!(
///     CategoryFocus::from_selection("Electronics", ""),
///     CategoryFocus::Category1("Electronics".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFocus {
    /// Viewing the first-level listing.
    #[default]
    Root,

    /// A first-level category is selected; viewing its sub-categories.
    Category1(String),

    /// Both levels are selected; still viewing the sub-categories of the
    /// first, with the second marked active.
    Category2(String, String),
}

impl CategoryFocus {
    /// Builds the focus from the flat pair of selected names.
    ///
    /// An empty string means "not selected". A second-level name without a
    /// first-level one is ignored.
    #[must_use]
    pub fn from_selection(category1: &str, category2: &str) -> Self {
        match (category1.is_empty(), category2.is_empty()) {
            (true, _) => {
                if !category2.is_empty() {
                    tracing::debug!(category2 = %category2, "ignoring category2 without category1");
                }
                Self::Root
            }
            (false, true) => Self::Category1(category1.to_string()),
            (false, false) => Self::Category2(category1.to_string(), category2.to_string()),
        }
    }

    /// The selected first-level name, if any.
    #[must_use]
    pub fn category1(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Category1(c1) | Self::Category2(c1, _) => Some(c1),
        }
    }

    /// The selected second-level name, if any.
    #[must_use]
    pub fn category2(&self) -> Option<&str> {
        match self {
            Self::Category2(_, c2) => Some(c2),
            _ => None,
        }
    }

    /// Drill-down depth: 0, 1 or 2.
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::Category1(_) => 1,
            Self::Category2(..) => 2,
        }
    }
}
