//! Brightness Controller - control screen brightness from a small window
//!
//! Single-window control panel: brightness slider, light/dark switch,
//! launch-at-login checkbox and an About dialog.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use brightness_controller::utils::{self, paths};
use gui::GuiController;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Logging problems are printed and ignored; only a window that cannot be
/// created at all stops the application.
fn main() -> Result<()> {
    if let Err(e) = utils::init_logging(&paths::log_dir()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("Brightness Controller v{} starting...", env!("CARGO_PKG_VERSION"));

    let gui = match GuiController::new().context("Failed to create the main window") {
        Ok(gui) => gui,
        Err(e) => {
            error!("{e:#}");
            show_fatal_error(&format!("Brightness Controller could not start:\n\n{e:#}"));
            return Err(e);
        }
    };

    gui.run().context("GUI event loop terminated with error")?;

    info!("Brightness Controller shutting down");
    Ok(())
}

/// Shows an error dialog before the application exits.
fn show_fatal_error(message: &str) {
    gui::reporter::show_message(
        "Brightness Controller - Error",
        message,
        rfd::MessageLevel::Error,
    );
}
