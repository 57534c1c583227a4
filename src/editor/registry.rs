//! Per-panel registry of live editor instances.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::{PanelError, WidgetId};

use super::EditorInstance;

/// Maps widget identifiers to the editor instances bound to them.
///
/// Write-once-then-read-many per identifier: `register` rejects duplicates
/// and `get` rejects lookups that precede the bind.
#[derive(Default)]
pub struct EditorRegistry {
    instances: HashMap<WidgetId, EditorInstance>,
}

impl EditorRegistry {
    pub fn register(&mut self, instance: EditorInstance) -> Result<(), PanelError> {
        let id = instance.widget();
        match self.instances.entry(id) {
            Entry::Occupied(_) => Err(PanelError::AlreadyBound(id)),
            Entry::Vacant(slot) => {
                slot.insert(instance);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: WidgetId) -> Result<&EditorInstance, PanelError> {
        self.instances.get(&id).ok_or(PanelError::UnboundEditor(id))
    }

    pub fn is_bound(&self, id: WidgetId) -> bool {
        self.instances.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::SyntaxMode;
    use crate::editor::{EditorFactory, Highlighter};

    fn factory() -> EditorFactory {
        EditorFactory::new(Arc::new(Highlighter::new()), "")
    }

    #[test]
    fn lookup_before_bind_is_unbound() {
        let registry = EditorRegistry::default();
        let err = registry.get(WidgetId("css_box")).unwrap_err();
        assert!(matches!(err, PanelError::UnboundEditor(WidgetId("css_box"))));
    }

    #[test]
    fn lookup_after_bind_succeeds() {
        let mut registry = EditorRegistry::default();
        let id = WidgetId("css_box");
        registry
            .register(factory().create(id, SyntaxMode::Css))
            .unwrap();
        assert!(registry.get(id).is_ok());
        assert!(registry.is_bound(id));
    }

    #[test]
    fn second_bind_is_rejected() {
        let mut registry = EditorRegistry::default();
        let id = WidgetId("css_box");
        let factory = factory();
        registry.register(factory.create(id, SyntaxMode::Css)).unwrap();
        let err = registry
            .register(factory.create(id, SyntaxMode::Css))
            .unwrap_err();
        assert!(matches!(err, PanelError::AlreadyBound(_)));
    }
}
