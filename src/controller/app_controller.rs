//! Application controller implementation
//!
//! Owns the application state and the adapters it was constructed with, and
//! exposes one method per user gesture. Every method runs to completion on
//! the UI thread and leaves the controller idle again.

use crate::brightness::BrightnessAdapter;
use crate::config::{ConfigStore, Preferences, Theme};
use crate::controller::theme::ThemeController;
use crate::error::ErrorReporter;
use crate::utils::AutoStartAdapter;
use std::rc::Rc;
use tracing::info;

/// Application state mirrored by the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Persisted user preferences
    pub preferences: Preferences,
    /// Last brightness level read from or accepted by the display
    pub brightness: u8,
}

/// Application logic controller
pub struct AppController {
    state: AppState,
    store: ConfigStore,
    brightness: BrightnessAdapter,
    auto_start: AutoStartAdapter,
    theme: ThemeController,
    reporter: Rc<dyn ErrorReporter>,
}

impl AppController {
    /// Create the controller and bring the system in line with the stored preferences
    ///
    /// Loads preferences (creating the file on first run), applies the stored
    /// theme, re-registers auto-start so the entry points at the current
    /// executable, and reads the current brightness.
    pub fn new(
        store: ConfigStore,
        brightness: BrightnessAdapter,
        auto_start: AutoStartAdapter,
        theme: ThemeController,
        reporter: Rc<dyn ErrorReporter>,
    ) -> Self {
        let preferences = store.load(reporter.as_ref());
        info!(
            "Starting with theme={}, auto_start={}",
            preferences.theme, preferences.auto_start
        );

        theme.restore(preferences.theme);
        if preferences.auto_start {
            auto_start.set_enabled(true);
        }
        let level = brightness.get();

        Self {
            state: AppState {
                preferences,
                brightness: level,
            },
            store,
            brightness,
            auto_start,
            theme,
            reporter,
        }
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Handle a slider movement
    ///
    /// Returns the level to show in the level label if the display accepted it.
    pub fn set_brightness(&mut self, value: f32) -> Option<u8> {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slider values are within 0..=100; the adapter clamps anyway"
        )]
        let value = value.round() as i32;

        if self.brightness.set(value) {
            let level = u8::try_from(value.clamp(0, 100)).unwrap_or(100);
            self.state.brightness = level;
            Some(level)
        } else {
            None
        }
    }

    /// Handle a click on the theme switch
    pub fn select_theme(&mut self, theme: Theme) {
        info!("Theme selected: {theme}");
        self.theme
            .apply(theme, &mut self.state.preferences, &self.store);
    }

    /// Handle a toggle of the auto-start checkbox
    ///
    /// The choice is persisted even if the OS entry could not be changed, so
    /// the next start tries again.
    pub fn set_auto_start(&mut self, enabled: bool) {
        info!("Auto-start toggled: {enabled}");
        self.auto_start.set_enabled(enabled);
        self.state.preferences.auto_start = enabled;
        self.store
            .save(&self.state.preferences, self.reporter.as_ref());
    }
}
