//! Display brightness module
//!
//! Queries and sets the brightness of a display as a percentage.
//!
//! # Architecture
//!
//! - [`BrightnessBackend`]: OS-specific access to a display, swappable in tests
//! - [`BrightnessAdapter`]: targets the primary display, reports failures and
//!   falls back to safe values instead of returning errors
//! - `windows_api`: DDC/CI through the Windows monitor configuration API
//! - [`sysfs`]: Linux backlight class devices
//!
//! Monitors expose brightness in their own raw range; [`raw_to_percent`] and
//! [`percent_to_raw`] translate between that range and 0-100.

pub mod controller;
pub mod sysfs;
#[cfg(windows)]
pub mod windows_api;

pub use controller::{BrightnessAdapter, DEFAULT_BRIGHTNESS, PRIMARY_DISPLAY};
pub use sysfs::SysfsBacklight;
#[cfg(windows)]
pub use windows_api::DdcBrightness;

use crate::error::Result;

/// OS-level access to display brightness
pub trait BrightnessBackend {
    /// Current brightness of the display at `display`, in percent
    fn get_brightness(&self, display: usize) -> Result<u8>;

    /// Set the brightness of the display at `display` to `percent` (0-100)
    fn set_brightness(&self, display: usize, percent: u8) -> Result<()>;
}

/// Backend for the platform the application was built for
pub fn default_backend() -> Box<dyn BrightnessBackend> {
    #[cfg(windows)]
    {
        Box::new(DdcBrightness)
    }

    #[cfg(not(windows))]
    {
        Box::new(SysfsBacklight::default())
    }
}

/// Convert a raw value in `min..=max` to a percentage, rounding to nearest
pub fn raw_to_percent(min: u32, current: u32, max: u32) -> u8 {
    if max <= min {
        return 100;
    }
    let span = u64::from(max - min);
    let offset = u64::from(current.clamp(min, max) - min);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset <= span, so the result is at most 100"
    )]
    let percent = ((offset * 100 + span / 2) / span) as u8;
    percent
}

/// Convert a percentage to a raw value in `min..=max`, rounding to nearest
pub fn percent_to_raw(min: u32, percent: u8, max: u32) -> u32 {
    if max <= min {
        return max;
    }
    let span = u64::from(max - min);
    let percent = u64::from(percent.min(100));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "percent <= 100, so the offset is at most span which fits in u32"
    )]
    let offset = ((span * percent + 50) / 100) as u32;
    min + offset
}
