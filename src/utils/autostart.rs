//! Auto-start registration
//!
//! Launch-at-login is a single named entry whose content is the quoted path of
//! the executable. On Windows the entry is a value under the current user's
//! `Run` registry key; elsewhere it is an XDG autostart `.desktop` file.
//!
//! [`AutoStartAdapter`] is the UI-facing side: it reports failures instead of
//! returning them, and removing an entry that does not exist counts as success.

use crate::error::{BrightnessControllerError, ErrorReporter, Result};
use crate::utils::paths;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Name of the auto-start entry
pub const AUTO_START_ENTRY: &str = "BrightnessController";

/// OS-level storage of auto-start entries
pub trait AutoStartBackend {
    /// Whether an entry called `name` exists
    fn is_registered(&self, name: &str) -> Result<bool>;

    /// Create or overwrite the entry `name` launching `command`
    fn register(&self, name: &str, command: &str) -> Result<()>;

    /// Remove the entry `name`; succeeds if it does not exist
    fn unregister(&self, name: &str) -> Result<()>;
}

/// Backend for the platform the application was built for
pub fn default_backend() -> Box<dyn AutoStartBackend> {
    #[cfg(windows)]
    {
        Box::new(RegistryAutoStart)
    }

    #[cfg(not(windows))]
    {
        Box::new(XdgAutoStart::default())
    }
}

/// Enables and disables launching the application at login
pub struct AutoStartAdapter {
    backend: Box<dyn AutoStartBackend>,
    reporter: Rc<dyn ErrorReporter>,
    entry_name: String,
    command: String,
}

impl AutoStartAdapter {
    /// Adapter registering `command` under [`AUTO_START_ENTRY`]
    pub fn new(
        backend: Box<dyn AutoStartBackend>,
        reporter: Rc<dyn ErrorReporter>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            reporter,
            entry_name: AUTO_START_ENTRY.to_string(),
            command: command.into(),
        }
    }

    /// Adapter registering the running executable
    ///
    /// If the executable path cannot be resolved the error is reported and
    /// registration falls back to the bare program name.
    pub fn for_current_exe(
        backend: Box<dyn AutoStartBackend>,
        reporter: Rc<dyn ErrorReporter>,
    ) -> Self {
        let command = paths::launch_command().unwrap_or_else(|e| {
            reporter.report(BrightnessControllerError::AutoStartError(Box::new(e)));
            format!("\"{}\"", env!("CARGO_PKG_NAME"))
        });
        Self::new(backend, reporter, command)
    }

    /// Command stored in the entry
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Add or remove the auto-start entry
    ///
    /// Idempotent. Returns whether the entry is now in the requested state.
    pub fn set_enabled(&self, enable: bool) -> bool {
        let result = if enable {
            self.backend.register(&self.entry_name, &self.command)
        } else {
            self.backend.unregister(&self.entry_name)
        };

        match result {
            Ok(()) => {
                info!(
                    "Auto-start {}",
                    if enable { "enabled" } else { "disabled" }
                );
                true
            }
            Err(e) => {
                warn!("Failed to set auto-start to {enable}: {e}");
                self.reporter.report(e);
                false
            }
        }
    }

    /// Whether the auto-start entry currently exists
    pub fn is_enabled(&self) -> bool {
        match self.backend.is_registered(&self.entry_name) {
            Ok(registered) => registered,
            Err(e) => {
                warn!("Failed to query auto-start: {e}");
                self.reporter.report(e);
                false
            }
        }
    }
}

/// Auto-start through XDG autostart desktop entries
#[derive(Debug, Clone)]
pub struct XdgAutoStart {
    dir: PathBuf,
}

impl Default for XdgAutoStart {
    /// `<user config dir>/autostart`, e.g. `~/.config/autostart`
    fn default() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(config_dir.join("autostart"))
    }
}

impl XdgAutoStart {
    /// Backend storing desktop entries in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.desktop"))
    }
}

impl AutoStartBackend for XdgAutoStart {
    fn is_registered(&self, name: &str) -> Result<bool> {
        Ok(self.entry_path(name).is_file())
    }

    fn register(&self, name: &str, command: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| BrightnessControllerError::AutoStartError(Box::new(e)))?;

        let entry = format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name={name}\n\
             Exec={command}\n\
             X-GNOME-Autostart-enabled=true\n"
        );
        let path = self.entry_path(name);
        std::fs::write(&path, entry)
            .map_err(|e| BrightnessControllerError::AutoStartError(Box::new(e)))?;

        debug!("Wrote autostart entry {}", path.display());
        Ok(())
    }

    fn unregister(&self, name: &str) -> Result<()> {
        let path = self.entry_path(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed autostart entry {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Autostart entry {} already absent", path.display());
                Ok(())
            }
            Err(e) => Err(BrightnessControllerError::AutoStartError(Box::new(e))),
        }
    }
}

/// Auto-start through `HKCU\Software\Microsoft\Windows\CurrentVersion\Run`
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryAutoStart;

#[cfg(windows)]
impl RegistryAutoStart {
    const RUN_KEY: &'static str = r"Software\Microsoft\Windows\CurrentVersion\Run";

    fn open_run_key(flags: u32) -> Result<winreg::RegKey> {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(Self::RUN_KEY, flags)
            .map_err(|e| BrightnessControllerError::AutoStartError(Box::new(e)))
    }
}

#[cfg(windows)]
impl AutoStartBackend for RegistryAutoStart {
    fn is_registered(&self, name: &str) -> Result<bool> {
        let key = Self::open_run_key(winreg::enums::KEY_QUERY_VALUE)?;
        match key.get_raw_value(name) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BrightnessControllerError::AutoStartError(Box::new(e))),
        }
    }

    fn register(&self, name: &str, command: &str) -> Result<()> {
        let key = Self::open_run_key(winreg::enums::KEY_SET_VALUE)?;
        key.set_value(name, &command)
            .map_err(|e| BrightnessControllerError::AutoStartError(Box::new(e)))?;
        debug!("Registry value {name} set to {command}");
        Ok(())
    }

    fn unregister(&self, name: &str) -> Result<()> {
        let key = Self::open_run_key(winreg::enums::KEY_SET_VALUE)?;
        match key.delete_value(name) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Registry value {name} already absent");
                Ok(())
            }
            Err(e) => Err(BrightnessControllerError::AutoStartError(Box::new(e))),
        }
    }
}
