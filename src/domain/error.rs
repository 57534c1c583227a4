//! Error type for panel, binding, and editor operations.

use super::WidgetId;

/// Errors raised by bindings, the editor registry, and widget access.
///
/// The first three variants are programmer errors: they indicate a misuse of
/// the binding protocol (wrong variant, wrong value kind, or an identifier
/// that was never wired to a widget) and are expected to surface during
/// development, not in a running panel. `UnboundEditor` and `AlreadyBound`
/// guard the bind-before-use ordering of editor bindings.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The abstract binding capability was invoked without a concrete variant.
    #[error("binding capability not implemented for this variant")]
    NotImplemented,

    /// A value of the wrong kind was pushed into a binding.
    #[error("binding `{id}` expects a {expected} value")]
    WrongKind { id: WidgetId, expected: &'static str },

    /// The identifier does not resolve to any widget.
    #[error("no widget registered under `{0}`")]
    MissingWidget(WidgetId),

    /// An editor binding was used before `bind()` registered its instance.
    #[error("editor `{0}` used before bind()")]
    UnboundEditor(WidgetId),

    /// A second `bind()` was attempted for the same identifier.
    #[error("editor `{0}` bound twice")]
    AlreadyBound(WidgetId),
}
