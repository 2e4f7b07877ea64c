//! Breadcrumb trail renderer.
//!
//! Interactive segments become buttons carrying `data-breadcrumb` anchors:
//! `reset` for the root, `category1` (with `data-category1`) for the
//! first-level segment. The current leaf is a plain span.

use maud::{html, Markup};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BreadcrumbAction, BreadcrumbSegment};

/// Renders the trail, separators between segments.
pub fn render_breadcrumb(segments: &[BreadcrumbSegment], separator: &str, theme: &Theme) -> Markup {
    let classes = &theme.classes;

    html! {
        @for (index, segment) in segments.iter().enumerate() {
            @if index > 0 {
                span class=(classes.breadcrumb_separator) { (separator) }
            }
            @match &segment.action {
                Some(BreadcrumbAction::Reset) => {
                    button data-breadcrumb="reset" class=(classes.breadcrumb_link) { (segment.label) }
                }
                Some(BreadcrumbAction::Category1(category1)) => {
                    button
                        data-breadcrumb="category1"
                        data-category1=(category1)
                        class=(classes.breadcrumb_link) { (segment.label) }
                }
                None => {
                    span class=(classes.breadcrumb_current) { (segment.label) }
                }
            }
        }
    }
}
