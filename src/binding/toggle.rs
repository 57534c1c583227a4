//! Boolean toggle binding.

use crate::domain::{FieldValue, PanelError, WidgetId};
use crate::panel::PanelSurface;
use crate::widget::WidgetHost;

use super::Binding;

/// Binding whose value is the widget's checked state.
#[derive(Debug, Clone, Copy)]
pub struct ToggleBinding {
    id: WidgetId,
}

impl ToggleBinding {
    pub const fn new(id: WidgetId) -> Self {
        Self { id }
    }

    pub fn get<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<bool, PanelError> {
        surface.widgets().checked(self.id)
    }

    pub fn set<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        on: bool,
    ) -> Result<(), PanelError> {
        surface.widgets_mut().set_checked(self.id, on)
    }
}

impl Binding for ToggleBinding {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn read<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<FieldValue, PanelError> {
        Ok(FieldValue::Flag(self.get(surface)?))
    }

    fn write<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        value: FieldValue,
    ) -> Result<(), PanelError> {
        match value {
            FieldValue::Flag(on) => self.set(surface, on),
            FieldValue::Text(_) => Err(PanelError::WrongKind {
                id: self.id,
                expected: "flag",
            }),
        }
    }
}
