//! The surface a panel operates on: its widgets plus its editor registry.

use crate::domain::PanelError;
use crate::editor::{EditorInstance, EditorRegistry};
use crate::widget::WidgetHost;

/// Owns the widget host and the editor registry for one panel.
///
/// Keeping the registry here, next to the widgets it decorates, means there
/// is no process-wide editor state: two panels get two registries.
pub struct PanelSurface<W: WidgetHost> {
    widgets: W,
    editors: EditorRegistry,
}

impl<W: WidgetHost> PanelSurface<W> {
    pub fn new(widgets: W) -> Self {
        Self {
            widgets,
            editors: EditorRegistry::default(),
        }
    }

    pub fn widgets(&self) -> &W {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut W {
        &mut self.widgets
    }

    pub fn editors(&self) -> &EditorRegistry {
        &self.editors
    }

    pub fn register_editor(&mut self, instance: EditorInstance) -> Result<(), PanelError> {
        self.editors.register(instance)
    }

    /// Split borrow: mutable widgets alongside the (read-only) registry.
    pub fn parts_mut(&mut self) -> (&mut W, &EditorRegistry) {
        (&mut self.widgets, &self.editors)
    }
}
