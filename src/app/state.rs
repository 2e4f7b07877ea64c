//! Normalized filter state and view model computation.
//!
//! [`FilterState`] is the boundary-normalized form of a
//! [`FilterProps`](super::FilterProps) snapshot: the category tree is in its
//! canonical shape, the selection path is an explicit
//! [`CategoryFocus`], and the sort and limit selections are enumeration
//! values. The three projections of the control live here:
//!
//! - breadcrumb trail from the focus
//! - category listing for the current depth
//! - option lists for the two selectors
//!
//! # Example
//!
//! ```rust
//! use filter_section::{FilterProps, FilterState};
//! use filter_section::domain::CategoryTree;
//! use filter_section::ui::Labels;
//!
//! let props = FilterProps::default()
//!     .with_categories(CategoryTree::from_entries([("Electronics", vec!["Phones"])]))
//!     .with_selection("Electronics", "");
//! let vm = FilterState::from_props(&props).compute_viewmodel(&Labels::default());
//! assert_eq!(vm.breadcrumb.len(), 2);
//! assert_eq!(vm.categories.buttons()[0].label, "Phones");
//! ```

use crate::domain::{CategoryFocus, CategoryTree, ItemLimit, SelectOption, SortOrder};
use crate::ui::labels::Labels;
use crate::ui::viewmodel::{
    BreadcrumbAction, BreadcrumbSegment, CategoryAction, CategoryButton, CategoryListing,
    FilterViewModel, OptionEntry, SearchBoxInfo, SelectorInfo,
};

use super::props::FilterProps;

/// Element id of the limit selector.
pub const LIMIT_SELECT_ID: &str = "limit-select";

/// Element id of the sort selector.
pub const SORT_SELECT_ID: &str = "sort-select";

/// Boundary-normalized filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free search text, unescaped.
    pub search_value: String,
    /// Canonical category tree.
    pub categories: CategoryTree,
    /// Current drill-down position.
    pub focus: CategoryFocus,
    /// Selected sort order.
    pub sort: SortOrder,
    /// Selected item limit.
    pub limit: ItemLimit,
    /// Whether categories are still loading.
    pub is_loading: bool,
}

impl FilterState {
    /// Normalizes a props snapshot.
    ///
    /// Unrecognized sort and limit values fall back to `price_asc` and `"20"`.
    #[must_use]
    pub fn from_props(props: &FilterProps) -> Self {
        Self {
            search_value: props.search_value.clone(),
            categories: props.categories.clone(),
            focus: CategoryFocus::from_selection(&props.selected_category1, &props.selected_category2),
            sort: SortOrder::from_value_or_default(&props.selected_sort),
            limit: ItemLimit::from_value_or_default(&props.selected_limit),
            is_loading: props.is_loading,
        }
    }

    /// Computes the display-ready view model.
    #[must_use]
    pub fn compute_viewmodel(&self, labels: &Labels) -> FilterViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            depth = self.focus.depth(),
            is_loading = self.is_loading,
            category_count = self.categories.len(),
        )
        .entered();

        FilterViewModel {
            search: SearchBoxInfo {
                value: self.search_value.clone(),
                placeholder: labels.search_placeholder.clone(),
            },
            category_label: labels.category_label.clone(),
            breadcrumb_separator: labels.breadcrumb_separator.clone(),
            breadcrumb: self.breadcrumb(labels),
            categories: self.category_listing(labels),
            limit: SelectorInfo {
                id: LIMIT_SELECT_ID,
                label: labels.limit_label.clone(),
                options: option_entries(self.limit, |limit| labels.limit_label(limit)),
            },
            sort: SelectorInfo {
                id: SORT_SELECT_ID,
                label: labels.sort_label.clone(),
                options: option_entries(self.sort, |sort| labels.sort_label(sort).to_string()),
            },
        }
    }

    /// Breadcrumb trail: root, then each selected level. The deepest selected
    /// level is the only non-interactive segment, except at the root.
    fn breadcrumb(&self, labels: &Labels) -> Vec<BreadcrumbSegment> {
        let mut trail = vec![BreadcrumbSegment {
            label: labels.breadcrumb_root.clone(),
            action: Some(BreadcrumbAction::Reset),
        }];

        if let Some(category1) = self.focus.category1() {
            trail.push(BreadcrumbSegment {
                label: category1.to_string(),
                action: Some(BreadcrumbAction::Category1(category1.to_string())),
            });
        }

        if let Some(category2) = self.focus.category2() {
            trail.push(BreadcrumbSegment {
                label: category2.to_string(),
                action: None,
            });
        }

        trail
    }

    /// Buttons for the current depth, or the loading placeholder.
    fn category_listing(&self, labels: &Labels) -> CategoryListing {
        if self.is_loading {
            return CategoryListing::Loading {
                message: labels.loading_categories.clone(),
            };
        }

        let buttons = match &self.focus {
            CategoryFocus::Root => self
                .categories
                .first_level()
                .map(|name| CategoryButton {
                    label: name.to_string(),
                    action: CategoryAction::SelectCategory1(name.to_string()),
                    is_active: self.focus.category1() == Some(name),
                })
                .collect(),
            CategoryFocus::Category1(category1) | CategoryFocus::Category2(category1, _) => {
                let Some(children) = self.categories.children(category1) else {
                    tracing::debug!(category1 = %category1, "selected category not in tree, listing nothing");
                    return CategoryListing::Buttons(Vec::new());
                };

                children
                    .iter()
                    .map(|name| CategoryButton {
                        label: name.clone(),
                        action: CategoryAction::SelectCategory2 {
                            category1: category1.clone(),
                            category2: name.clone(),
                        },
                        is_active: self.focus.category2() == Some(name.as_str()),
                    })
                    .collect()
            }
        };

        CategoryListing::Buttons(buttons)
    }
}

impl From<&FilterProps> for FilterState {
    fn from(props: &FilterProps) -> Self {
        Self::from_props(props)
    }
}

/// One entry per enumeration value, the one equal to `selected` marked.
fn option_entries<T, F>(selected: T, label: F) -> Vec<OptionEntry>
where
    T: SelectOption,
    F: Fn(T) -> String,
{
    T::ALL
        .iter()
        .map(|&option| OptionEntry {
            value: option.value(),
            label: label(option),
            is_selected: option == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electronics() -> CategoryTree {
        CategoryTree::from_entries([
            ("Electronics", vec!["Phones", "Laptops", "Cameras"]),
            ("Books", vec!["Fiction"]),
        ])
    }

    fn viewmodel(props: &FilterProps) -> FilterViewModel {
        FilterState::from_props(props).compute_viewmodel(&Labels::default())
    }

    fn labels_of(listing: &CategoryListing) -> Vec<&str> {
        listing.buttons().iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn root_lists_first_level_none_active() {
        let vm = viewmodel(&FilterProps::default().with_categories(electronics()));

        assert_eq!(labels_of(&vm.categories), ["Electronics", "Books"]);
        assert!(vm.categories.buttons().iter().all(|b| !b.is_active));
        assert_eq!(
            vm.categories.buttons()[1].action,
            CategoryAction::SelectCategory1("Books".to_string())
        );
    }

    #[test]
    fn category1_lists_its_children_none_active() {
        let props = FilterProps::default()
            .with_categories(electronics())
            .with_selection("Electronics", "");
        let vm = viewmodel(&props);

        assert_eq!(labels_of(&vm.categories), ["Phones", "Laptops", "Cameras"]);
        assert!(vm.categories.buttons().iter().all(|b| !b.is_active));
        assert_eq!(
            vm.categories.buttons()[0].action,
            CategoryAction::SelectCategory2 {
                category1: "Electronics".to_string(),
                category2: "Phones".to_string(),
            }
        );
    }

    #[test]
    fn category2_marks_exactly_one_active() {
        let props = FilterProps::default()
            .with_categories(electronics())
            .with_selection("Electronics", "Laptops");
        let vm = viewmodel(&props);

        let active: Vec<_> = vm
            .categories
            .buttons()
            .iter()
            .filter(|b| b.is_active)
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(active, ["Laptops"]);
    }

    #[test]
    fn unknown_category2_marks_nothing() {
        let props = FilterProps::default()
            .with_categories(electronics())
            .with_selection("Electronics", "Tablets");
        let vm = viewmodel(&props);

        assert_eq!(vm.categories.buttons().len(), 3);
        assert!(vm.categories.buttons().iter().all(|b| !b.is_active));
    }

    #[test]
    fn unknown_category1_lists_nothing() {
        let props = FilterProps::default()
            .with_categories(electronics())
            .with_selection("Garden", "");

        assert_eq!(viewmodel(&props).categories, CategoryListing::Buttons(vec![]));
    }

    #[test]
    fn list_form_category1_has_no_children() {
        let props = FilterProps::default()
            .with_categories(CategoryTree::from_names(["Books", "Garden"]))
            .with_selection("Books", "");

        assert!(viewmodel(&props).categories.buttons().is_empty());
    }

    #[test]
    fn empty_tree_lists_nothing() {
        let vm = viewmodel(&FilterProps::default());
        assert_eq!(vm.categories, CategoryListing::Buttons(vec![]));
    }

    #[test]
    fn loading_replaces_buttons_at_every_depth() {
        for (c1, c2) in [("", ""), ("Electronics", ""), ("Electronics", "Phones")] {
            let props = FilterProps::default()
                .with_categories(electronics())
                .with_selection(c1, c2)
                .with_loading(true);

            assert_eq!(
                viewmodel(&props).categories,
                CategoryListing::Loading { message: "Loading categories...".to_string() }
            );
        }
    }

    #[test]
    fn breadcrumb_depths() {
        let root = viewmodel(&FilterProps::default());
        assert_eq!(root.breadcrumb.len(), 1);
        assert_eq!(root.breadcrumb[0].label, "All");
        assert_eq!(root.breadcrumb[0].action, Some(BreadcrumbAction::Reset));

        let one = viewmodel(&FilterProps::default().with_selection("Electronics", ""));
        assert_eq!(one.breadcrumb.len(), 2);
        assert!(one.breadcrumb.iter().all(BreadcrumbSegment::is_interactive));
        assert_eq!(
            one.breadcrumb[1].action,
            Some(BreadcrumbAction::Category1("Electronics".to_string()))
        );

        let two = viewmodel(&FilterProps::default().with_selection("Electronics", "Phones"));
        let labels: Vec<_> = two.breadcrumb.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["All", "Electronics", "Phones"]);
        assert!(two.breadcrumb[0].is_interactive());
        assert!(two.breadcrumb[1].is_interactive());
        assert!(!two.breadcrumb[2].is_interactive());
    }

    #[test]
    fn breadcrumb_ignores_category2_without_category1() {
        let vm = viewmodel(&FilterProps::default().with_selection("", "Phones"));
        assert_eq!(vm.breadcrumb.len(), 1);
    }

    #[test]
    fn selectors_mark_exactly_one_option() {
        for sort in SortOrder::ALL {
            let vm = viewmodel(&FilterProps::default().with_sort(sort.value()));
            let selected: Vec<_> = vm.sort.options.iter().filter(|o| o.is_selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].value, sort.value());
            assert_eq!(selected[0].label, Labels::default().sort_label(*sort));
        }

        for limit in ItemLimit::ALL {
            let vm = viewmodel(&FilterProps::default().with_limit(limit.value()));
            let selected = vm.limit.selected().unwrap();
            assert_eq!(selected.value, limit.value());
            assert_eq!(selected.label, format!("{} items", limit.count()));
            assert_eq!(vm.limit.options.iter().filter(|o| o.is_selected).count(), 1);
        }
    }

    #[test]
    fn unrecognized_selector_values_select_defaults() {
        let vm = viewmodel(&FilterProps::default().with_sort("popularity").with_limit("25"));

        assert_eq!(vm.sort.selected().unwrap().label, "Price: Low to High");
        assert_eq!(vm.limit.selected().unwrap().label, "20 items");
    }

    #[test]
    fn selectors_carry_their_anchor_ids() {
        let vm = viewmodel(&FilterProps::default());
        assert_eq!(vm.limit.id, "limit-select");
        assert_eq!(vm.sort.id, "sort-select");
    }
}
