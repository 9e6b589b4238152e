//! Preference file persistence
//!
//! Loading never fails from the caller's point of view: a missing file is
//! created with defaults, and an unreadable or corrupt file is reported and
//! replaced in memory by defaults while being left untouched on disk.

use crate::config::models::Preferences;
use crate::error::{BrightnessControllerError, ErrorReporter, Result};
use crate::utils::paths;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the preference file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes [`Preferences`] to a single JSON file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, next to the executable
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the default path of the configuration file
    ///
    /// Returns: `<directory of the executable>/config.json`
    pub fn default_path() -> PathBuf {
        paths::app_dir().join(CONFIG_FILE_NAME)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, creating the file with defaults if it is absent
    pub fn try_load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            info!(
                "Configuration file {} not found, creating it with defaults",
                self.path.display()
            );
            let defaults = Preferences::default();
            self.try_save(&defaults)?;
            return Ok(defaults);
        }

        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| BrightnessControllerError::ConfigError(Box::new(e)))?;
        let prefs: Preferences = serde_json::from_str(&json)
            .map_err(|e| BrightnessControllerError::ConfigError(Box::new(e)))?;

        info!(
            "Configuration loaded: theme={}, auto_start={}",
            prefs.theme, prefs.auto_start
        );
        Ok(prefs)
    }

    /// Load preferences, reporting any failure and falling back to defaults
    pub fn load(&self, reporter: &dyn ErrorReporter) -> Preferences {
        match self.try_load() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Failed to load configuration, using defaults: {e}");
                reporter.report(e);
                Preferences::default()
            }
        }
    }

    /// Serialize and overwrite the preference file
    pub fn try_save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .map_err(|e| BrightnessControllerError::ConfigError(Box::new(e)))?;
        }

        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| BrightnessControllerError::ConfigError(Box::new(e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| BrightnessControllerError::ConfigError(Box::new(e)))?;

        debug!("Configuration saved to {}", self.path.display());
        Ok(())
    }

    /// Save preferences, reporting any failure
    ///
    /// Returns whether the file was written. The caller's copy is never touched.
    pub fn save(&self, prefs: &Preferences, reporter: &dyn ErrorReporter) -> bool {
        match self.try_save(prefs) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Failed to save configuration: {e}. Continuing with in-memory preferences."
                );
                reporter.report(e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::test_utils::{RecordingReporter, create_test_dir};
    use proptest::prelude::*;

    #[test]
    fn test_default_path_is_config_json() {
        let path = ConfigStore::default_path();
        assert!(path.to_string_lossy().ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_missing_creates_defaults() {
        let dir = create_test_dir();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        let reporter = RecordingReporter::default();

        let prefs = store.load(&reporter);

        assert_eq!(prefs, Preferences::default());
        assert!(store.path().exists(), "load should create the missing file");
        let on_disk: Preferences =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, Preferences::default());
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_defaults_and_keeps_file() {
        let dir = create_test_dir();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ this is not json").unwrap();
        let store = ConfigStore::new(&path);
        let reporter = RecordingReporter::default();

        let prefs = store.load(&reporter);

        assert_eq!(prefs, Preferences::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ this is not json");
        assert_eq!(reporter.titles(), vec!["Config Error"]);
        assert!(reporter.messages()[0].starts_with("Configuration error: "));
    }

    #[test]
    fn test_load_accepts_capitalized_theme() {
        let dir = create_test_dir();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"theme": "Dark", "auto_start": true}"#).unwrap();
        let store = ConfigStore::new(&path);
        let reporter = RecordingReporter::default();

        let prefs = store.load(&reporter);

        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.auto_start);
        assert!(reporter.is_empty(), "{:?}", reporter.messages());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = create_test_dir();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        let reporter = RecordingReporter::default();
        let prefs = Preferences {
            theme: Theme::Light,
            auto_start: true,
        };

        assert!(store.save(&prefs, &reporter));
        assert_eq!(store.load(&reporter), prefs);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = create_test_dir();
        let store = ConfigStore::new(dir.path().join("nested").join(CONFIG_FILE_NAME));

        store.try_save(&Preferences::default()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = create_test_dir();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = ConfigStore::new(blocker.join(CONFIG_FILE_NAME));
        let reporter = RecordingReporter::default();

        let saved = store.save(&Preferences::default(), &reporter);

        assert!(!saved);
        assert_eq!(reporter.titles(), vec!["Config Error"]);
    }

    proptest! {
        #[test]
        fn prop_load_never_panics_nor_rewrites_existing_file(content in ".*") {
            let dir = create_test_dir();
            let path = dir.path().join(CONFIG_FILE_NAME);
            std::fs::write(&path, &content).unwrap();
            let store = ConfigStore::new(&path);
            let reporter = RecordingReporter::default();

            let prefs = store.load(&reporter);

            prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
            if !reporter.is_empty() {
                prop_assert_eq!(prefs, Preferences::default());
            }
        }
    }
}
