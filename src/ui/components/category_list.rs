//! Category button list renderer.
//!
//! Renders the buttons for the current drill-down depth, or the loading
//! placeholder. First-level buttons carry the `category1-filter-btn` anchor
//! class and a `data-category1` value; second-level buttons carry
//! `category2-filter-btn` plus both `data-category1` and `data-category2`.

use maud::{html, Markup};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryAction, CategoryButton, CategoryListing};

/// Anchor class of first-level buttons.
pub const CATEGORY1_BUTTON_CLASS: &str = "category1-filter-btn";

/// Anchor class of second-level buttons.
pub const CATEGORY2_BUTTON_CLASS: &str = "category2-filter-btn";

/// Renders the listing inside its container.
pub fn render_category_list(listing: &CategoryListing, theme: &Theme) -> Markup {
    let classes = &theme.classes;

    html! {
        div class=(classes.category_list) {
            @match listing {
                CategoryListing::Loading { message } => {
                    div class=(classes.loading) { (message) }
                }
                CategoryListing::Buttons(buttons) => {
                    @for button in buttons {
                        (render_category_button(button, theme))
                    }
                }
            }
        }
    }
}

fn render_category_button(button: &CategoryButton, theme: &Theme) -> Markup {
    let classes = &theme.classes;
    let state_class = if button.is_active {
        &classes.category_button_active
    } else {
        &classes.category_button_inactive
    };

    match &button.action {
        CategoryAction::SelectCategory1(category1) => {
            let class = Theme::class_list(&[CATEGORY1_BUTTON_CLASS, &classes.category_button, state_class]);
            html! {
                button data-category1=(category1) class=(class) { (button.label) }
            }
        }
        CategoryAction::SelectCategory2 { category1, category2 } => {
            let class = Theme::class_list(&[CATEGORY2_BUTTON_CLASS, &classes.category_button, state_class]);
            html! {
                button data-category1=(category1) data-category2=(category2) class=(class) { (button.label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_level(name: &str) -> CategoryButton {
        CategoryButton {
            label: name.to_string(),
            action: CategoryAction::SelectCategory1(name.to_string()),
            is_active: false,
        }
    }

    fn second_level(name: &str, is_active: bool) -> CategoryButton {
        CategoryButton {
            label: name.to_string(),
            action: CategoryAction::SelectCategory2 {
                category1: "Electronics".to_string(),
                category2: name.to_string(),
            },
            is_active,
        }
    }

    #[test]
    fn first_level_buttons() {
        let listing = CategoryListing::Buttons(vec![first_level("Books"), first_level("Garden")]);
        let html = render_category_list(&listing, &Theme::default()).into_string();

        assert_eq!(html.matches(CATEGORY1_BUTTON_CLASS).count(), 2);
        assert!(html.contains(r#"data-category1="Books""#));
        assert!(!html.contains("data-category2"));
        assert!(!html.contains("bg-blue-100"));
    }

    #[test]
    fn second_level_active_styling() {
        let listing = CategoryListing::Buttons(vec![
            second_level("Phones", false),
            second_level("Laptops", true),
        ]);
        let html = render_category_list(&listing, &Theme::default()).into_string();

        assert_eq!(html.matches(CATEGORY2_BUTTON_CLASS).count(), 2);
        assert_eq!(html.matches(r#"data-category1="Electronics""#).count(), 2);
        assert_eq!(html.matches("bg-blue-100 border-blue-300 text-blue-800").count(), 1);
        assert!(html.contains(
            r#"<button data-category1="Electronics" data-category2="Laptops" class="category2-filter-btn text-left px-3 py-2 text-sm rounded-md border transition-colors bg-blue-100 border-blue-300 text-blue-800">Laptops</button>"#
        ));
    }

    #[test]
    fn loading_has_no_buttons() {
        let listing = CategoryListing::Loading {
            message: "Loading categories...".to_string(),
        };
        let html = render_category_list(&listing, &Theme::default()).into_string();

        assert!(!html.contains("<button"));
        assert!(html.contains("Loading categories..."));
    }

    #[test]
    fn names_are_escaped() {
        let listing = CategoryListing::Buttons(vec![first_level("<b>\"Toys\"</b>")]);
        let html = render_category_list(&listing, &Theme::default()).into_string();

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&quot;Toys&quot;&lt;/b&gt;"));
    }

    #[test]
    fn empty_listing_renders_empty_container() {
        let html = render_category_list(&CategoryListing::Buttons(vec![]), &Theme::default())
            .into_string();
        assert_eq!(html, r#"<div class="flex flex-wrap gap-2"></div>"#);
    }
}
