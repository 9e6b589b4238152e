//! GUI module
//!
//! Provides the Slint-based main window, the About dialog and the message
//! boxes used to report errors to the user.

pub mod about;
pub mod gui_controller;
pub mod reporter;

pub use gui_controller::GuiController;
