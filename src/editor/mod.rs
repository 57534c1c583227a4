//! Rich code-editor machinery.
//!
//! The pieces mirror the lifecycle of an editor-backed field: the one-time
//! [`loader`] setup produces an [`EditorFactory`]; `bind()` on an editor
//! binding asks the factory for an [`EditorInstance`] attached to one widget
//! and parks it in the [`EditorRegistry`]; from then on the binding's get/set
//! delegate to the instance.

mod highlight;
mod linenum;
mod loader;
mod registry;

pub use highlight::{escape, Grammar, Highlighter, TokenKind};
pub use linenum::with_line_numbers;
pub use loader::editor_factory;
pub use registry::EditorRegistry;

use std::sync::Arc;

use crate::domain::{PanelError, SyntaxMode, WidgetId};
use crate::widget::WidgetHost;

/// Creates editor instances with the highlighting callback wired in.
///
/// Obtained from [`editor_factory`]; there is one factory per process and it
/// is immutable once built.
pub struct EditorFactory {
    highlighter: Arc<Highlighter>,
    stylesheet: &'static str,
}

impl EditorFactory {
    pub(crate) fn new(highlighter: Arc<Highlighter>, stylesheet: &'static str) -> Self {
        Self {
            highlighter,
            stylesheet,
        }
    }

    /// Stylesheet the rendered markup expects to be styled with.
    pub fn stylesheet(&self) -> &'static str {
        self.stylesheet
    }

    /// Create an instance attached to `widget`, rendering with `mode`.
    pub fn create(&self, widget: WidgetId, mode: SyntaxMode) -> EditorInstance {
        EditorInstance {
            widget,
            mode,
            highlighter: Arc::clone(&self.highlighter),
        }
    }
}

/// A live editor attached to a single widget.
#[derive(Debug)]
pub struct EditorInstance {
    widget: WidgetId,
    mode: SyntaxMode,
    highlighter: Arc<Highlighter>,
}

impl EditorInstance {
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    pub fn mode(&self) -> SyntaxMode {
        self.mode
    }

    /// Replace the editor content and re-render its markup.
    ///
    /// The raw text is reset first; rendering straight over the previous
    /// markup would let old spans pile up inside the widget.
    pub fn update_code(&self, widgets: &mut dyn WidgetHost, code: &str) -> Result<(), PanelError> {
        widgets.set_text(self.widget, code)?;
        let markup =
            with_line_numbers(code, |line| self.highlighter.render(self.mode, line));
        widgets.set_markup(self.widget, &markup)
    }

    /// The raw text currently held by the widget.
    pub fn text(&self, widgets: &dyn WidgetHost) -> Result<String, PanelError> {
        widgets.text(self.widget)
    }

    /// Re-render the markup from whatever the widget currently holds.
    pub fn refresh(&self, widgets: &mut dyn WidgetHost) -> Result<(), PanelError> {
        let code = self.text(widgets)?;
        self.update_code(widgets, &code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MemoryWidgets;

    const BOX_ID: WidgetId = WidgetId("json_box");

    fn instance() -> EditorInstance {
        let mut hl = Highlighter::new();
        hl.register(SyntaxMode::Json, Grammar::json().unwrap());
        EditorFactory::new(Arc::new(hl), "").create(BOX_ID, SyntaxMode::Json)
    }

    #[test]
    fn update_code_round_trips_raw_text() {
        let mut widgets = MemoryWidgets::with_ids([BOX_ID]);
        let editor = instance();

        editor.update_code(&mut widgets, r#"{"a": 1}"#).unwrap();
        assert_eq!(editor.text(&widgets).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn update_code_renders_fresh_markup() {
        let mut widgets = MemoryWidgets::with_ids([BOX_ID]);
        let editor = instance();

        editor.update_code(&mut widgets, r#""old""#).unwrap();
        editor.update_code(&mut widgets, r#""new""#).unwrap();

        let markup = widgets.state(BOX_ID).unwrap().markup.clone().unwrap();
        assert!(markup.contains("new"));
        assert!(!markup.contains("old"));
        assert!(markup.contains("gutter"));
    }

    #[test]
    fn refresh_rerenders_user_edits() {
        let mut widgets = MemoryWidgets::with_ids([BOX_ID]);
        let editor = instance();

        editor.update_code(&mut widgets, "1").unwrap();
        // Simulate a direct edit of the widget text.
        widgets.set_text(BOX_ID, "2").unwrap();
        editor.refresh(&mut widgets).unwrap();

        let markup = widgets.state(BOX_ID).unwrap().markup.clone().unwrap();
        assert!(markup.contains(r#"<span class="hl-number">2</span>"#));
    }
}
