//! Application icon decoding
//!
//! The icon PNG is embedded in the binary and decoded once at startup into
//! RGBA pixels for the window icon and the About dialog.

use crate::error::{BrightnessControllerError, Result};

/// PNG bytes of the bundled application icon
pub const APP_ICON_PNG: &[u8] = include_bytes!("../../assets/icon.png");

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPixels {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major RGBA8 data, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Decode PNG bytes into RGBA pixels
pub fn decode_png(bytes: &[u8]) -> Result<IconPixels> {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| BrightnessControllerError::IconLoadError(Box::new(e)))?
        .into_rgba8();

    let (width, height) = image.dimensions();
    tracing::debug!("Decoded {width}x{height} icon");

    Ok(IconPixels {
        width,
        height,
        rgba: image.into_raw(),
    })
}

/// Decode the bundled application icon
pub fn load_app_icon() -> Result<IconPixels> {
    decode_png(APP_ICON_PNG)
}
