//! Search box component renderer.
//!
//! This module renders the free-text search input with its magnifier icon.
//! The input carries the `search-input` id the event layer reads from.

use maud::{html, Markup};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxInfo;

/// Element id of the search field.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Magnifier outline, 24x24 viewbox.
const SEARCH_ICON_PATH: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";

/// Renders the search block.
///
/// # Layout
///
/// ```text
/// [section]
///   [wrapper]
///     <input id="search-input" value="...">
///     [icon wrapper] <svg> (non-interactive)
/// ```
///
/// The current value is interpolated as an attribute and therefore escaped.
pub fn render_search_box(search: &SearchBoxInfo, theme: &Theme) -> Markup {
    let classes = &theme.classes;

    html! {
        div class=(classes.search_section) {
            div class=(classes.search_wrapper) {
                input
                    type="text"
                    id=(SEARCH_INPUT_ID)
                    placeholder=(search.placeholder)
                    value=(search.value)
                    class=(classes.search_input);
                div class=(classes.search_icon_wrapper) {
                    svg class=(classes.search_icon) fill="none" stroke="currentColor" viewBox="0 0 24 24" {
                        path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=(SEARCH_ICON_PATH) {}
                    }
                }
            }
        }
    }
}
