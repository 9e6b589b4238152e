//! Brightness Controller - a small control panel for display brightness
//!
//! Lets the user adjust the primary display's brightness with a slider,
//! switch between light and dark appearance, and launch the application at
//! login. Preferences live in `config.json` next to the executable.
//!
//! The library holds everything except the Slint window: the preference
//! store, the OS adapters behind swappable traits, and the `AppController`
//! the GUI drives. All of it is single-threaded and runs on the UI thread.

// Module declarations
pub mod brightness;
pub mod config;
pub mod controller;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{BrightnessControllerError, ErrorReporter, Result};
