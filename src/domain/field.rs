//! Widget identifiers and the values that flow through bindings.

use std::fmt;

/// Stable identifier of a panel widget.
///
/// Widget ids are declared once, at startup, in the form definition; they are
/// plain static strings so bindings stay `Copy` and cheap to pass around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub &'static str);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A value read from or written to a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw text content (plain fields and rich editors).
    Text(String),
    /// Checked state (toggles).
    Flag(bool),
}

impl FieldValue {
    /// Human-readable kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
