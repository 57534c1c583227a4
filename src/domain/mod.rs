//! Shared domain types

mod error;
mod field;
mod mode;

pub use error::PanelError;
pub use field::{FieldValue, WidgetId};
pub use mode::SyntaxMode;
