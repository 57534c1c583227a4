//! Rich-editor field binding.

use crate::domain::{FieldValue, PanelError, SyntaxMode, WidgetId};
use crate::editor::EditorFactory;
use crate::panel::PanelSurface;
use crate::widget::WidgetHost;

use super::Binding;

/// Binding backed by a rich code-editor widget.
///
/// Declared unbound; [`EditorBinding::bind`] must run exactly once, with a
/// ready factory, before get/set are used. Until then both accessors fail
/// with [`PanelError::UnboundEditor`].
#[derive(Debug, Clone, Copy)]
pub struct EditorBinding {
    id: WidgetId,
    mode: Option<SyntaxMode>,
}

impl EditorBinding {
    /// Editor binding without a syntax mode (renders as plain text).
    pub const fn new(id: WidgetId) -> Self {
        Self { id, mode: None }
    }

    pub const fn with_mode(id: WidgetId, mode: SyntaxMode) -> Self {
        Self {
            id,
            mode: Some(mode),
        }
    }

    /// Grammar the highlighting step applies.
    pub fn mode(&self) -> SyntaxMode {
        self.mode.unwrap_or_default()
    }

    /// Create an editor instance attached to this binding's widget and
    /// register it under the binding's identifier.
    pub fn bind<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        factory: &EditorFactory,
    ) -> Result<(), PanelError> {
        let instance = factory.create(self.id, self.mode());
        surface.register_editor(instance)
    }

    pub fn get<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<String, PanelError> {
        surface.editors().get(self.id)?.text(surface.widgets())
    }

    pub fn set<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        value: &str,
    ) -> Result<(), PanelError> {
        let (widgets, editors) = surface.parts_mut();
        editors.get(self.id)?.update_code(widgets, value)
    }
}

impl Binding for EditorBinding {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn read<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<FieldValue, PanelError> {
        Ok(FieldValue::Text(self.get(surface)?))
    }

    fn write<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        value: FieldValue,
    ) -> Result<(), PanelError> {
        match value {
            FieldValue::Text(text) => self.set(surface, &text),
            FieldValue::Flag(_) => Err(PanelError::WrongKind {
                id: self.id,
                expected: "text",
            }),
        }
    }
}
