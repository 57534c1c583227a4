//! The settings panel: surface, form declaration, and controller.

mod controller;
mod form;
mod surface;

pub use controller::SettingsController;
pub use form::OptionsForm;
pub use surface::PanelSurface;
