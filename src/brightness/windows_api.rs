//! DDC/CI brightness control on Windows
//!
//! Uses the high-level monitor configuration API from `Dxva2.dll`: the primary
//! `HMONITOR` is resolved to its physical monitors and brightness is read and
//! written through `GetMonitorBrightness` / `SetMonitorBrightness`. Monitors
//! report their own min/max range, which is scaled to a percentage.

use crate::brightness::{BrightnessBackend, PRIMARY_DISPLAY, percent_to_raw, raw_to_percent};
use crate::error::{BrightnessControllerError, Result, StringError};
use tracing::debug;
use windows::Win32::Devices::Display::{
    DestroyPhysicalMonitors, GetMonitorBrightness, GetNumberOfPhysicalMonitorsFromHMONITOR,
    GetPhysicalMonitorsFromHMONITOR, PHYSICAL_MONITOR, SetMonitorBrightness,
};
use windows::Win32::Foundation::POINT;
use windows::Win32::Graphics::Gdi::{MONITOR_DEFAULTTOPRIMARY, MonitorFromPoint};

/// Brightness backend speaking DDC/CI to the primary monitor
#[derive(Debug, Default, Clone, Copy)]
pub struct DdcBrightness;

/// Physical monitor handles, destroyed on drop
struct PhysicalMonitors(Vec<PHYSICAL_MONITOR>);

impl Drop for PhysicalMonitors {
    #[expect(unsafe_code, reason = "Windows FFI to release physical monitor handles")]
    fn drop(&mut self) {
        // SAFETY: the handles were returned by GetPhysicalMonitorsFromHMONITOR
        // and are released exactly once here.
        unsafe {
            let _ = DestroyPhysicalMonitors(&self.0);
        }
    }
}

/// Raw brightness range and value of a monitor
#[derive(Debug, Clone, Copy)]
struct RawBrightness {
    min: u32,
    current: u32,
    max: u32,
}

impl DdcBrightness {
    /// Physical monitors behind the primary display
    #[expect(unsafe_code, reason = "Windows FFI to enumerate physical monitors")]
    fn primary_monitors(display: usize) -> Result<PhysicalMonitors> {
        if display != PRIMARY_DISPLAY {
            return Err(BrightnessControllerError::BrightnessError(StringError::new(
                format!("display {display} is not supported, only the primary display is"),
            )));
        }

        // SAFETY: MonitorFromPoint with MONITOR_DEFAULTTOPRIMARY always returns a
        // valid HMONITOR; the output buffer is sized from the reported count.
        unsafe {
            let hmonitor = MonitorFromPoint(POINT { x: 0, y: 0 }, MONITOR_DEFAULTTOPRIMARY);

            let mut count = 0u32;
            GetNumberOfPhysicalMonitorsFromHMONITOR(hmonitor, &raw mut count)
                .map_err(|e| BrightnessControllerError::BrightnessError(Box::new(e)))?;
            if count == 0 {
                return Err(BrightnessControllerError::BrightnessError(StringError::new(
                    "the primary display has no physical monitor",
                )));
            }

            let mut monitors = vec![PHYSICAL_MONITOR::default(); count as usize];
            GetPhysicalMonitorsFromHMONITOR(hmonitor, &mut monitors)
                .map_err(|e| BrightnessControllerError::BrightnessError(Box::new(e)))?;

            debug!("Primary display has {count} physical monitor(s)");
            Ok(PhysicalMonitors(monitors))
        }
    }

    #[expect(unsafe_code, reason = "Windows FFI to query DDC/CI brightness")]
    fn read_raw(monitor: &PHYSICAL_MONITOR) -> Result<RawBrightness> {
        let (mut min, mut current, mut max) = (0u32, 0u32, 0u32);
        // SAFETY: the handle is live for the lifetime of the enclosing
        // PhysicalMonitors and the out pointers reference local variables.
        let ok = unsafe {
            GetMonitorBrightness(
                monitor.hPhysicalMonitor,
                &raw mut min,
                &raw mut current,
                &raw mut max,
            )
        };
        if ok == 0 {
            return Err(BrightnessControllerError::BrightnessError(StringError::new(
                "GetMonitorBrightness failed; the monitor may not support DDC/CI",
            )));
        }
        Ok(RawBrightness { min, current, max })
    }
}

impl BrightnessBackend for DdcBrightness {
    fn get_brightness(&self, display: usize) -> Result<u8> {
        let monitors = Self::primary_monitors(display)?;
        let raw = Self::read_raw(&monitors.0[0])?;
        debug!(
            "DDC/CI brightness {} in range {}..={}",
            raw.current, raw.min, raw.max
        );
        Ok(raw_to_percent(raw.min, raw.current, raw.max))
    }

    #[expect(unsafe_code, reason = "Windows FFI to set DDC/CI brightness")]
    fn set_brightness(&self, display: usize, percent: u8) -> Result<()> {
        let monitors = Self::primary_monitors(display)?;
        for monitor in &monitors.0 {
            let raw = Self::read_raw(monitor)?;
            let value = percent_to_raw(raw.min, percent, raw.max);
            // SAFETY: the handle is live for the lifetime of `monitors`.
            let ok = unsafe { SetMonitorBrightness(monitor.hPhysicalMonitor, value) };
            if ok == 0 {
                return Err(BrightnessControllerError::BrightnessError(StringError::new(
                    "SetMonitorBrightness failed; the monitor may not support DDC/CI",
                )));
            }
            debug!("DDC/CI brightness set to {value} ({percent}%)");
        }
        Ok(())
    }
}
