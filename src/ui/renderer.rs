//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points. Rendering is a two-step
//! process:
//!
//! 1. **View Model Computation**: normalize [`FilterProps`] into a
//!    [`FilterState`] and project it into a `FilterViewModel`
//! 2. **Component Rendering**: hand the view model to the markup components
//!
//! Both steps are pure. The same props always produce byte-identical output.
//!
//! # Example
//!
//! ```rust
//! use filter_section::{render_filter_section, FilterProps};
//!
//! let html = render_filter_section(&FilterProps::default());
//! assert!(html.contains(r#"id="search-input""#));
//! ```

use maud::Markup;

use crate::app::{FilterProps, FilterState};
use crate::ui::components;
use crate::ui::labels::Labels;
use crate::ui::theme::Theme;

/// A configured filter section renderer.
///
/// Holds only immutable presentation settings, so one instance can serve any
/// number of renders, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSection {
    theme: Theme,
    labels: Labels,
}

impl FilterSection {
    /// Creates a renderer with the given theme and labels.
    #[must_use]
    pub const fn new(theme: Theme, labels: Labels) -> Self {
        Self { theme, labels }
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Active label set.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Renders the control to an HTML string.
    #[must_use]
    pub fn render(&self, props: &FilterProps) -> String {
        let html = self.render_markup(props).into_string();
        tracing::trace!(bytes = html.len(), "filter section rendered");
        html
    }

    /// Renders the control as a typed markup value, for embedding into a
    /// larger `maud` template.
    #[must_use]
    pub fn render_markup(&self, props: &FilterProps) -> Markup {
        self.render_state(&FilterState::from(props))
    }

    /// Renders an already-normalized state.
    #[must_use]
    pub fn render_state(&self, state: &FilterState) -> Markup {
        let _span = tracing::debug_span!("render_filter_section", theme = %self.theme.name).entered();

        let viewmodel = state.compute_viewmodel(&self.labels);
        components::render_layout(&viewmodel, &self.theme)
    }
}

/// Renders with the default theme and English labels.
#[must_use]
pub fn render_filter_section(props: &FilterProps) -> String {
    FilterSection::default().render(props)
}
