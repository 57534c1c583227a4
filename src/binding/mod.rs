//! Typed bindings between settings fields and panel widgets.
//!
//! A binding pairs one widget identifier with one settings field and exposes
//! get/set for that field's type. The [`Binding`] trait is the shared
//! capability; its default method bodies fail with
//! [`PanelError::NotImplemented`], so only the concrete variants - text,
//! toggle, editor - are actually usable.

mod editor;
mod text;
mod toggle;

pub use editor::EditorBinding;
pub use text::TextBinding;
pub use toggle::ToggleBinding;

use crate::domain::{FieldValue, PanelError, WidgetId};
use crate::panel::PanelSurface;
use crate::widget::WidgetHost;

/// Capability shared by every binding variant.
pub trait Binding {
    /// Identifier of the widget this binding is attached to.
    fn id(&self) -> WidgetId;

    /// Read the current widget state as a field value.
    fn read<W: WidgetHost>(&self, surface: &PanelSurface<W>) -> Result<FieldValue, PanelError> {
        let _ = surface;
        Err(PanelError::NotImplemented)
    }

    /// Push a field value into the widget.
    fn write<W: WidgetHost>(
        &self,
        surface: &mut PanelSurface<W>,
        value: FieldValue,
    ) -> Result<(), PanelError> {
        let _ = (surface, value);
        Err(PanelError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::MemoryWidgets;

    const HOST: WidgetId = WidgetId("host_box");
    const FLAG: WidgetId = WidgetId("flag_box");

    fn surface() -> PanelSurface<MemoryWidgets> {
        PanelSurface::new(MemoryWidgets::with_ids([HOST, FLAG]))
    }

    struct Bare;

    impl Binding for Bare {
        fn id(&self) -> WidgetId {
            WidgetId("bare")
        }
    }

    #[test]
    fn bare_capability_is_not_implemented() {
        let mut surface = surface();
        assert!(matches!(
            Bare.read(&surface),
            Err(PanelError::NotImplemented)
        ));
        assert!(matches!(
            Bare.write(&mut surface, FieldValue::Flag(true)),
            Err(PanelError::NotImplemented)
        ));
    }

    #[test]
    fn text_round_trips() {
        let mut surface = surface();
        let binding = TextBinding::new(HOST);

        binding.set(&mut surface, "http://localhost:13131").unwrap();
        assert_eq!(binding.get(&surface).unwrap(), "http://localhost:13131");

        binding
            .write(&mut surface, FieldValue::Text("http://h".into()))
            .unwrap();
        assert_eq!(
            binding.read(&surface).unwrap(),
            FieldValue::Text("http://h".into())
        );
    }

    #[test]
    fn toggle_round_trips() {
        let mut surface = surface();
        let binding = ToggleBinding::new(FLAG);

        binding.set(&mut surface, true).unwrap();
        assert!(binding.get(&surface).unwrap());

        binding.write(&mut surface, FieldValue::Flag(false)).unwrap();
        assert_eq!(binding.read(&surface).unwrap(), FieldValue::Flag(false));
    }

    #[test]
    fn wrong_value_kind_is_rejected() {
        let mut surface = surface();

        let err = TextBinding::new(HOST)
            .write(&mut surface, FieldValue::Flag(true))
            .unwrap_err();
        assert!(matches!(
            err,
            PanelError::WrongKind {
                expected: "text",
                ..
            }
        ));

        let err = ToggleBinding::new(FLAG)
            .write(&mut surface, FieldValue::Text("yes".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            PanelError::WrongKind {
                expected: "flag",
                ..
            }
        ));
    }

    #[test]
    fn unknown_widget_surfaces_missing() {
        let surface = surface();
        let err = TextBinding::new(WidgetId("ghost")).get(&surface).unwrap_err();
        assert!(matches!(err, PanelError::MissingWidget(WidgetId("ghost"))));
    }
}
