//! Appearance mode control
//!
//! Applying a theme has two independent failure points: changing the UI
//! appearance and persisting the choice. Each is reported on its own and
//! neither stops the other.

use crate::config::{ConfigStore, Preferences, Theme};
use crate::error::{ErrorReporter, Result};
use std::rc::Rc;
use tracing::{info, warn};

/// Whatever renders the UI and can switch its color scheme
pub trait AppearanceSink {
    /// Switch the whole UI to `theme`
    fn set_appearance(&self, theme: Theme) -> Result<()>;
}

/// Applies appearance modes and records them in the preference file
pub struct ThemeController {
    sink: Box<dyn AppearanceSink>,
    reporter: Rc<dyn ErrorReporter>,
}

impl ThemeController {
    /// Create a controller driving `sink`
    pub fn new(sink: Box<dyn AppearanceSink>, reporter: Rc<dyn ErrorReporter>) -> Self {
        Self { sink, reporter }
    }

    /// Apply `theme` to the UI without persisting it
    ///
    /// Returns whether the appearance was changed.
    pub fn restore(&self, theme: Theme) -> bool {
        match self.sink.set_appearance(theme) {
            Ok(()) => {
                info!("Appearance set to {theme}");
                true
            }
            Err(e) => {
                warn!("Failed to apply theme {theme}: {e}");
                self.reporter.report(e);
                false
            }
        }
    }

    /// Apply `theme` to the UI, then record it in `prefs` and persist them
    pub fn apply(&self, theme: Theme, prefs: &mut Preferences, store: &ConfigStore) {
        self.restore(theme);
        prefs.theme = theme;
        store.save(prefs, self.reporter.as_ref());
    }
}
