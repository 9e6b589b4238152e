//! Error types for Brightness Controller
//!
//! Every failure the application can hit is a variant of
//! [`BrightnessControllerError`]. None of them is fatal: they are handed to an
//! [`ErrorReporter`] at the point of origin and the operation falls back to a
//! safe default or leaves the previous state unchanged.
//!
//! Error variants use `#[source]` to preserve error chains for logging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for Brightness Controller
#[derive(Debug, Error)]
pub enum BrightnessControllerError {
    /// Loading or saving the preference file failed
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Querying or setting display brightness failed
    #[error("Brightness error: {0}")]
    BrightnessError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading or writing the auto-start entry failed
    #[error("Auto-start error: {0}")]
    AutoStartError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Applying the appearance mode failed
    #[error("Theme error: {0}")]
    ThemeError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The application icon could not be decoded
    #[error("Icon load error: {0}")]
    IconLoadError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The About dialog could not be constructed or shown
    #[error("Dialog error: {0}")]
    DialogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Brightness Controller operations
pub type Result<T> = std::result::Result<T, BrightnessControllerError>;

impl BrightnessControllerError {
    /// Title of the message box shown for this error
    pub fn title(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "Config Error",
            Self::BrightnessError(_) => "Brightness Error",
            Self::AutoStartError(_) => "Auto-start Error",
            Self::ThemeError(_) => "Theme Error",
            Self::IconLoadError(_) => "Icon Warning",
            Self::DialogError(_) => "About Error",
            Self::IoError(_) => "File Error",
        }
    }

    /// Whether the error is only a cosmetic problem
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::IconLoadError(_))
    }
}

/// Convert an error to a user-friendly message
///
/// Returns the text shown in the message box body. The underlying error is
/// appended so the user can tell what actually went wrong.
pub fn get_user_friendly_error(error: &BrightnessControllerError) -> String {
    match error {
        BrightnessControllerError::ConfigError(e) => format!(
            "Failed to load or save config.json.\n\n{e}\n\n\
             Your settings may not persist. Check that the folder containing \
             the application is writable."
        ),
        BrightnessControllerError::BrightnessError(e) => format!(
            "Failed to get or set brightness.\n\n{e}\n\n\
             Your display may not support software brightness control."
        ),
        BrightnessControllerError::AutoStartError(e) => {
            format!("Failed to set auto-start.\n\n{e}")
        }
        BrightnessControllerError::ThemeError(e) => format!("Failed to apply theme.\n\n{e}"),
        BrightnessControllerError::IconLoadError(e) => format!(
            "Failed to load app icon.\n\n{e}\n\n\
             This does not affect functionality."
        ),
        BrightnessControllerError::DialogError(e) => {
            format!("Failed to open About dialog.\n\n{e}")
        }
        BrightnessControllerError::IoError(e) => format!(
            "A file system error occurred:\n\n{e}\n\n\
             Please check file permissions and disk space."
        ),
    }
}

/// Channel through which recoverable errors reach the user
///
/// Components never propagate their failures to the event loop; they hand
/// them to a reporter and carry on.
pub trait ErrorReporter {
    /// Surface an error to the user
    fn report(&self, error: BrightnessControllerError);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BrightnessControllerError::BrightnessError(StringError::new("no DDC/CI"));
        assert_eq!(error.to_string(), "Brightness error: no DDC/CI");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: BrightnessControllerError = io_error.into();
        assert!(matches!(error, BrightnessControllerError::IoError(_)));
    }

    #[test]
    fn test_titles_per_kind() {
        let cases = [
            (
                BrightnessControllerError::ConfigError(StringError::new("x")),
                "Config Error",
            ),
            (
                BrightnessControllerError::AutoStartError(StringError::new("x")),
                "Auto-start Error",
            ),
            (
                BrightnessControllerError::DialogError(StringError::new("x")),
                "About Error",
            ),
        ];
        for (error, title) in cases {
            assert_eq!(error.title(), title);
        }
    }

    #[test]
    fn test_only_icon_errors_are_warnings() {
        assert!(BrightnessControllerError::IconLoadError(StringError::new("bad png")).is_warning());
        assert!(!BrightnessControllerError::ThemeError(StringError::new("x")).is_warning());
    }

    #[test]
    fn test_user_friendly_message_includes_cause() {
        let error = BrightnessControllerError::AutoStartError(StringError::new("access denied"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("Failed to set auto-start"));
        assert!(message.contains("access denied"));
    }

    #[test]
    fn test_corrupt_config_message_names_the_file() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = BrightnessControllerError::ConfigError(Box::new(json_error));
        let message = get_user_friendly_error(&error);
        assert_eq!(error.title(), "Config Error");
        assert!(message.contains("config.json"));
        assert!(message.contains("EOF"));
    }
}
