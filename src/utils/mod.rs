//! Utility modules
//!
//! Provides auto-start management, icon decoding, logging, file locations and
//! window placement helpers.

pub mod autostart;
pub mod icon;
pub mod logging;
pub mod paths;
pub mod placement;

pub use autostart::{AutoStartAdapter, AutoStartBackend, XdgAutoStart};
#[cfg(windows)]
pub use autostart::RegistryAutoStart;
pub use icon::{IconPixels, load_app_icon};
pub use logging::init_logging;
