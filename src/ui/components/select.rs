//! Labelled `<select>` renderer, shared by the limit and sort selectors.

use maud::{html, Markup};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectorInfo;

/// Renders the label and the select with one option per entry. The entry
/// marked selected gets the `selected` attribute.
pub fn render_selector(selector: &SelectorInfo, theme: &Theme) -> Markup {
    let classes = &theme.classes;

    html! {
        div class=(classes.selector_group) {
            label for=(selector.id) class=(classes.label) { (selector.label) }
            select id=(selector.id) class=(classes.select) {
                @for entry in &selector.options {
                    option value=(entry.value) selected[entry.is_selected] { (entry.label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::OptionEntry;

    fn limit_selector(selected: &str) -> SelectorInfo {
        SelectorInfo {
            id: "limit-select",
            label: "Items:".to_string(),
            options: ["10", "20", "50", "100"]
                .into_iter()
                .map(|value| OptionEntry {
                    value,
                    label: format!("{value} items"),
                    is_selected: value == selected,
                })
                .collect(),
        }
    }

    #[test]
    fn exactly_one_option_selected() {
        let html = render_selector(&limit_selector("50"), &Theme::default()).into_string();

        assert_eq!(html.matches("<option").count(), 4);
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains(r#"<option value="50" selected>50 items</option>"#));
        assert!(html.contains(r#"<option value="20">20 items</option>"#));
    }

    #[test]
    fn options_keep_enumeration_order() {
        let html = render_selector(&limit_selector("10"), &Theme::default()).into_string();

        let positions: Vec<_> = ["10 items", "20 items", "50 items", "100 items"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn carries_anchor_id() {
        let html = render_selector(&limit_selector("20"), &Theme::default()).into_string();
        assert!(html.contains(r#"<select id="limit-select""#));
        assert!(html.contains(r#"<label for="limit-select""#));
    }
}
