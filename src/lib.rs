//! Prefpane - a settings panel engine.
//!
//! Prefpane keeps a typed settings object in sync with a set of interactive
//! panel widgets: plain text fields, boolean toggles, and rich code-editor
//! widgets with syntax highlighting. It also ships a timeout-bounded health
//! probe for the backend the settings point at.
//!
//! ## Structure
//!
//! - [`binding`] - typed get/set capabilities pairing settings fields with
//!   widgets.
//! - [`editor`] - the rich-editor machinery: one-time lazy setup, the
//!   instance factory, the highlighter, and the per-panel registry.
//! - [`panel`] - the form declaration, the panel surface, and the
//!   load/save/probe controller.
//! - [`probe`] - the backend `/status` check.
//! - [`settings`] - the persisted settings object and its store.
//! - [`widget`] - the widget access abstraction plus an in-memory host.

pub mod binding;
pub mod domain;
pub mod editor;
pub mod notify;
pub mod panel;
pub mod probe;
pub mod settings;
pub mod widget;

pub use domain::*;
