//! Brightness adapter for the primary display
//!
//! Wraps a [`BrightnessBackend`] so that callers in the UI never see an error:
//! failures go to the [`ErrorReporter`] and a safe value is returned instead.

use crate::brightness::BrightnessBackend;
use crate::error::ErrorReporter;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Display index brightness operations target
pub const PRIMARY_DISPLAY: usize = 0;

/// Brightness shown when the current level cannot be queried
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Gets and sets the brightness of the primary display
pub struct BrightnessAdapter {
    backend: Box<dyn BrightnessBackend>,
    reporter: Rc<dyn ErrorReporter>,
    /// Last level the backend accepted, used to skip repeated slider steps
    last_applied: Cell<Option<u8>>,
}

impl BrightnessAdapter {
    /// Create an adapter over `backend`, reporting failures to `reporter`
    pub fn new(backend: Box<dyn BrightnessBackend>, reporter: Rc<dyn ErrorReporter>) -> Self {
        Self {
            backend,
            reporter,
            last_applied: Cell::new(None),
        }
    }

    /// Current brightness of the primary display in percent
    ///
    /// Returns [`DEFAULT_BRIGHTNESS`] if the display cannot be queried.
    pub fn get(&self) -> u8 {
        match self.backend.get_brightness(PRIMARY_DISPLAY) {
            Ok(percent) => {
                let percent = percent.min(100);
                debug!("Primary display brightness is {percent}%");
                self.last_applied.set(Some(percent));
                percent
            }
            Err(e) => {
                warn!("Failed to get brightness, assuming {DEFAULT_BRIGHTNESS}%: {e}");
                self.reporter.report(e);
                DEFAULT_BRIGHTNESS
            }
        }
    }

    /// Apply `value` (clamped to 0-100) to the primary display
    ///
    /// Returns whether the display now has that level. A value equal to the
    /// last applied level is not sent again.
    pub fn set(&self, value: i32) -> bool {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is clamped to 0..=100 first"
        )]
        let percent = value.clamp(0, 100) as u8;

        if self.last_applied.get() == Some(percent) {
            return true;
        }

        match self.backend.set_brightness(PRIMARY_DISPLAY, percent) {
            Ok(()) => {
                debug!("Primary display brightness set to {percent}%");
                self.last_applied.set(Some(percent));
                true
            }
            Err(e) => {
                warn!("Failed to set brightness to {percent}%: {e}");
                self.reporter.report(e);
                false
            }
        }
    }
}
