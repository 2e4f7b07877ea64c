//! View model types representing the renderable filter control.
//!
//! View models are computed from a [`FilterState`](crate::app::FilterState)
//! by `FilterState::compute_viewmodel()` and consumed by the markup
//! components. They contain no decisions, only display-ready data: every
//! label is resolved, every active/selected flag is set, and every
//! interaction anchor is spelled out as a typed action.
//!
//! # Example
//!
//! ```rust
//! use filter_section::ui::viewmodel::{BreadcrumbAction, BreadcrumbSegment};
//!
//! let root = BreadcrumbSegment {
//!     label: "All".to_string(),
//!     action: Some(BreadcrumbAction::Reset),
//! };
//! assert!(root.is_interactive());
//! ```

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterViewModel {
    /// Search field contents.
    pub search: SearchBoxInfo,

    /// Label in front of the breadcrumb.
    pub category_label: String,

    /// Text between breadcrumb segments.
    pub breadcrumb_separator: String,

    /// Breadcrumb trail, root first.
    pub breadcrumb: Vec<BreadcrumbSegment>,

    /// Category buttons for the current depth, or the loading placeholder.
    pub categories: CategoryListing,

    /// Item-count selector.
    pub limit: SelectorInfo,

    /// Sort selector.
    pub sort: SelectorInfo,
}

/// Search field display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxInfo {
    /// Current search text, unescaped.
    pub value: String,
    /// Placeholder shown when the field is empty.
    pub placeholder: String,
}

/// What clicking a breadcrumb segment asks the event layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbAction {
    /// Clear both selection levels.
    Reset,
    /// Keep this first-level category, clear the second level.
    Category1(String),
}

/// One segment of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    /// Display text.
    pub label: String,
    /// `None` for the current, non-interactive leaf.
    pub action: Option<BreadcrumbAction>,
}

impl BreadcrumbSegment {
    /// Whether the segment is rendered as a clickable button.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.action.is_some()
    }
}

/// What clicking a category button asks the event layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryAction {
    /// Select a first-level category.
    SelectCategory1(String),
    /// Select a second-level category under `category1`.
    SelectCategory2 {
        /// The unchanged first-level selection.
        category1: String,
        /// The candidate second-level category.
        category2: String,
    },
}

/// A selectable category button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    /// Display text.
    pub label: String,
    /// Interaction carried by the button.
    pub action: CategoryAction,
    /// Whether the button gets active styling.
    pub is_active: bool,
}

/// Category listing for the current depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListing {
    /// Categories are still loading; only a placeholder is shown.
    Loading {
        /// Placeholder text.
        message: String,
    },
    /// Buttons for the current depth. May be empty.
    Buttons(Vec<CategoryButton>),
}

impl CategoryListing {
    /// Buttons in display order; empty while loading.
    #[must_use]
    pub fn buttons(&self) -> &[CategoryButton] {
        match self {
            Self::Loading { .. } => &[],
            Self::Buttons(buttons) => buttons,
        }
    }
}

/// A `<select>` with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorInfo {
    /// Element id, the anchor the event layer reads from.
    pub id: &'static str,
    /// Label shown in front of the selector.
    pub label: String,
    /// Options in enumeration order.
    pub options: Vec<OptionEntry>,
}

impl SelectorInfo {
    /// The option marked selected, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&OptionEntry> {
        self.options.iter().find(|option| option.is_selected)
    }
}

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Wire value.
    pub value: &'static str,
    /// Display text.
    pub label: String,
    /// Whether this option is pre-selected.
    pub is_selected: bool,
}
