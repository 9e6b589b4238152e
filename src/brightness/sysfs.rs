//! Linux backlight control through sysfs
//!
//! Each directory under `/sys/class/backlight` is one device exposing
//! `brightness` and `max_brightness` as decimal integers. Devices are indexed
//! in name order; writing usually needs a udev rule or group membership.

use crate::brightness::{BrightnessBackend, percent_to_raw, raw_to_percent};
use crate::error::{BrightnessControllerError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the backlight class
pub const BACKLIGHT_CLASS_DIR: &str = "/sys/class/backlight";

/// Brightness backend reading and writing sysfs backlight devices
#[derive(Debug, Clone)]
pub struct SysfsBacklight {
    class_dir: PathBuf,
}

impl Default for SysfsBacklight {
    fn default() -> Self {
        Self::new(BACKLIGHT_CLASS_DIR)
    }
}

impl SysfsBacklight {
    /// Backend rooted at `class_dir` instead of the system backlight class
    pub fn new(class_dir: impl Into<PathBuf>) -> Self {
        Self {
            class_dir: class_dir.into(),
        }
    }

    /// Directory of the device at `display`
    fn device_dir(&self, display: usize) -> Result<PathBuf> {
        let entries = std::fs::read_dir(&self.class_dir).map_err(|e| {
            BrightnessControllerError::BrightnessError(StringError::new(format!(
                "cannot read {}: {e}",
                self.class_dir.display()
            )))
        })?;

        let mut devices: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.join("max_brightness").exists())
            .collect();
        devices.sort();

        devices.into_iter().nth(display).ok_or_else(|| {
            BrightnessControllerError::BrightnessError(StringError::new(format!(
                "no backlight device with index {display} in {}",
                self.class_dir.display()
            )))
        })
    }
}

/// Read a sysfs attribute holding a single unsigned integer
fn read_value(path: &Path) -> Result<u32> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| BrightnessControllerError::BrightnessError(Box::new(e)))?;
    raw.trim().parse::<u32>().map_err(|e| {
        BrightnessControllerError::BrightnessError(StringError::new(format!(
            "invalid value {:?} in {}: {e}",
            raw.trim(),
            path.display()
        )))
    })
}

impl BrightnessBackend for SysfsBacklight {
    fn get_brightness(&self, display: usize) -> Result<u8> {
        let device = self.device_dir(display)?;
        let max = read_value(&device.join("max_brightness"))?;
        let current = read_value(&device.join("brightness"))?;
        debug!("{}: raw brightness {current}/{max}", device.display());
        Ok(raw_to_percent(0, current, max))
    }

    fn set_brightness(&self, display: usize, percent: u8) -> Result<()> {
        let device = self.device_dir(display)?;
        let max = read_value(&device.join("max_brightness"))?;
        let raw = percent_to_raw(0, percent, max);
        std::fs::write(device.join("brightness"), raw.to_string())
            .map_err(|e| BrightnessControllerError::BrightnessError(Box::new(e)))?;
        debug!("{}: wrote raw brightness {raw}/{max}", device.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    fn add_device(class_dir: &Path, name: &str, current: u32, max: u32) -> PathBuf {
        let device = class_dir.join(name);
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("brightness"), format!("{current}\n")).unwrap();
        fs::write(device.join("max_brightness"), format!("{max}\n")).unwrap();
        device
    }

    #[test]
    fn test_get_scales_to_percent() {
        let dir = create_test_dir();
        add_device(dir.path(), "intel_backlight", 960, 1920);
        let backend = SysfsBacklight::new(dir.path());

        assert_eq!(backend.get_brightness(0).unwrap(), 50);
    }

    #[test]
    fn test_set_writes_raw_value() {
        let dir = create_test_dir();
        let device = add_device(dir.path(), "acpi_video0", 0, 255);
        let backend = SysfsBacklight::new(dir.path());

        backend.set_brightness(0, 100).unwrap();

        assert_eq!(fs::read_to_string(device.join("brightness")).unwrap(), "255");
    }

    #[test]
    fn test_devices_are_indexed_by_name() {
        let dir = create_test_dir();
        add_device(dir.path(), "b_device", 10, 100);
        add_device(dir.path(), "a_device", 80, 100);
        let backend = SysfsBacklight::new(dir.path());

        assert_eq!(backend.get_brightness(0).unwrap(), 80);
        assert_eq!(backend.get_brightness(1).unwrap(), 10);
    }

    #[test]
    fn test_missing_device_is_brightness_error() {
        let dir = create_test_dir();
        let backend = SysfsBacklight::new(dir.path());

        let error = backend.get_brightness(0).unwrap_err();
        assert!(matches!(error, BrightnessControllerError::BrightnessError(_)));
    }

    #[test]
    fn test_missing_class_dir_is_brightness_error() {
        let dir = create_test_dir();
        let backend = SysfsBacklight::new(dir.path().join("does-not-exist"));

        let error = backend.set_brightness(0, 10).unwrap_err();
        assert!(matches!(error, BrightnessControllerError::BrightnessError(_)));
    }

    #[test]
    fn test_garbage_value_is_brightness_error() {
        let dir = create_test_dir();
        let device = add_device(dir.path(), "panel", 0, 100);
        fs::write(device.join("brightness"), "bright").unwrap();
        let backend = SysfsBacklight::new(dir.path());

        assert!(backend.get_brightness(0).is_err());
    }
}
