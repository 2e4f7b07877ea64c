//! Composable markup component renderers.
//!
//! Each component renders one part of the filter control from its slice of
//! the view model. All of them return [`maud::Markup`]; text and attribute
//! values are escaped by the `html!` macro, so no component handles raw
//! strings.
//!
//! # Components
//!
//! - [`search`]: Search input with magnifier icon
//! - [`breadcrumb`]: Category trail with reset / up-one-level anchors
//! - [`category_list`]: Category buttons for the current depth
//! - [`select`]: Labelled selector (limit and sort)
//!
//! # Layout
//!
//! [`render_layout`] assembles them in fixed order:
//!
//! ```text
//! [Search box]
//! [Category label] [Breadcrumb]
//! [Category buttons | loading placeholder]
//! [Limit selector]          [Sort selector]
//! ```

pub mod breadcrumb;
pub mod category_list;
pub mod search;
pub mod select;

use maud::{html, Markup};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterViewModel;

use breadcrumb::render_breadcrumb;
use category_list::render_category_list;
use search::render_search_box;
use select::render_selector;

/// Renders the full control from a view model.
pub fn render_layout(vm: &FilterViewModel, theme: &Theme) -> Markup {
    let classes = &theme.classes;

    html! {
        div class=(classes.container) {
            (render_search_box(&vm.search, theme))

            div class=(classes.filters) {
                div class=(classes.category_section) {
                    div class=(classes.breadcrumb_row) {
                        label class=(classes.label) { (vm.category_label) }
                        (render_breadcrumb(&vm.breadcrumb, &vm.breadcrumb_separator, theme))
                    }
                    (render_category_list(&vm.categories, theme))
                }

                div class=(classes.selector_row) {
                    (render_selector(&vm.limit, theme))
                    (render_selector(&vm.sort, theme))
                }
            }
        }
    }
}
