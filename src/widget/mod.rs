//! Widget access abstraction.
//!
//! The panel never touches a concrete UI toolkit; it goes through
//! [`WidgetHost`], which resolves stable identifiers to widget state. The
//! in-memory implementation here backs the tests and the `preview` CLI
//! command.

use std::collections::HashMap;

use crate::domain::{PanelError, WidgetId};

/// Resolves widget identifiers and exposes their state.
///
/// Every accessor fails with [`PanelError::MissingWidget`] when the
/// identifier is not wired to a widget.
pub trait WidgetHost {
    /// Raw text content of the widget.
    fn text(&self, id: WidgetId) -> Result<String, PanelError>;

    /// Replace the widget's raw text content. Any rendered markup the widget
    /// held is discarded, like a text-content reset on a DOM node.
    fn set_text(&mut self, id: WidgetId, value: &str) -> Result<(), PanelError>;

    /// Checked state of the widget.
    fn checked(&self, id: WidgetId) -> Result<bool, PanelError>;

    /// Set the checked state of the widget.
    fn set_checked(&mut self, id: WidgetId, on: bool) -> Result<(), PanelError>;

    /// Replace the widget's rendered markup without touching its raw text.
    fn set_markup(&mut self, id: WidgetId, markup: &str) -> Result<(), PanelError>;

    /// Install a stylesheet on the hosting surface.
    fn install_stylesheet(&mut self, css: &str);
}

/// State of a single in-memory widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub text: String,
    pub checked: bool,
    pub markup: Option<String>,
}

/// In-memory [`WidgetHost`] keyed by widget id.
#[derive(Debug, Default)]
pub struct MemoryWidgets {
    widgets: HashMap<WidgetId, WidgetState>,
    stylesheet: Option<String>,
}

impl MemoryWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with one empty widget per id.
    pub fn with_ids(ids: impl IntoIterator<Item = WidgetId>) -> Self {
        let mut host = Self::new();
        for id in ids {
            host.register(id);
        }
        host
    }

    /// Add an empty widget under `id`.
    pub fn register(&mut self, id: WidgetId) {
        self.widgets.entry(id).or_default();
    }

    pub fn state(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    fn get(&self, id: WidgetId) -> Result<&WidgetState, PanelError> {
        self.widgets.get(&id).ok_or(PanelError::MissingWidget(id))
    }

    fn get_mut(&mut self, id: WidgetId) -> Result<&mut WidgetState, PanelError> {
        self.widgets.get_mut(&id).ok_or(PanelError::MissingWidget(id))
    }
}

impl WidgetHost for MemoryWidgets {
    fn text(&self, id: WidgetId) -> Result<String, PanelError> {
        Ok(self.get(id)?.text.clone())
    }

    fn set_text(&mut self, id: WidgetId, value: &str) -> Result<(), PanelError> {
        let widget = self.get_mut(id)?;
        widget.text = value.to_string();
        widget.markup = None;
        Ok(())
    }

    fn checked(&self, id: WidgetId) -> Result<bool, PanelError> {
        Ok(self.get(id)?.checked)
    }

    fn set_checked(&mut self, id: WidgetId, on: bool) -> Result<(), PanelError> {
        self.get_mut(id)?.checked = on;
        Ok(())
    }

    fn set_markup(&mut self, id: WidgetId, markup: &str) -> Result<(), PanelError> {
        self.get_mut(id)?.markup = Some(markup.to_string());
        Ok(())
    }

    fn install_stylesheet(&mut self, css: &str) {
        self.stylesheet = Some(css.to_string());
    }
}
