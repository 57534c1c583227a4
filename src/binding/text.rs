//! Plain text field binding.

use crate::domain::{FieldValue, PanelError, WidgetId};
use crate::panel::PanelSurface;
use crate::widget::WidgetHost;

use super::Binding;

/// Binding whose value is the widget's raw text content.
#[derive(Debug, Clone, Copy)]
pub struct TextBinding {
    id: WidgetId,
}

impl TextBinding {
    pub const fn new(id: WidgetId) -> Self {
        Self { id }
    }

    pub fn get<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<String, PanelError> {
        surface.widgets().text(self.id)
    }

    pub fn set<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        value: &str,
    ) -> Result<(), PanelError> {
        surface.widgets_mut().set_text(self.id, value)
    }
}

impl Binding for TextBinding {
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
