//! Integration tests for Brightness Controller
//!
//! Drive `AppController` the way the main window does, with in-memory
//! display and appearance backends and a real preference file in a temp dir.

use brightness_controller::{
    BrightnessControllerError, ErrorReporter, Result,
    brightness::{BrightnessAdapter, BrightnessBackend},
    config::{ConfigStore, Preferences, Theme},
    controller::{AppController, AppearanceSink, ThemeController},
    error::{StringError, get_user_friendly_error},
    utils::{AutoStartAdapter, AutoStartBackend, XdgAutoStart, autostart::AUTO_START_ENTRY},
};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

#[derive(Default)]
struct Recorder(RefCell<Vec<String>>);

impl ErrorReporter for Recorder {
    fn report(&self, error: BrightnessControllerError) {
        self.0.borrow_mut().push(error.title().to_string());
    }
}

struct Display {
    level: Rc<Cell<u8>>,
    broken: bool,
}

impl BrightnessBackend for Display {
    fn get_brightness(&self, _display: usize) -> Result<u8> {
        if self.broken {
            return Err(BrightnessControllerError::BrightnessError(StringError::new(
                "no DDC/CI",
            )));
        }
        Ok(self.level.get())
    }

    fn set_brightness(&self, _display: usize, percent: u8) -> Result<()> {
        if self.broken {
            return Err(BrightnessControllerError::BrightnessError(StringError::new(
                "no DDC/CI",
            )));
        }
        self.level.set(percent);
        Ok(())
    }
}

struct Appearance(Rc<RefCell<Option<Theme>>>);

impl AppearanceSink for Appearance {
    fn set_appearance(&self, theme: Theme) -> Result<()> {
        *self.0.borrow_mut() = Some(theme);
        Ok(())
    }
}

struct App {
    dir: TempDir,
    reporter: Rc<Recorder>,
    level: Rc<Cell<u8>>,
    appearance: Rc<RefCell<Option<Theme>>>,
}

impl App {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            reporter: Rc::new(Recorder::default()),
            level: Rc::new(Cell::new(40)),
            appearance: Rc::new(RefCell::new(None)),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    fn autostart(&self) -> XdgAutoStart {
        XdgAutoStart::new(self.dir.path().join("autostart"))
    }

    fn start(&self, broken_display: bool) -> AppController {
        let reporter: Rc<dyn ErrorReporter> = self.reporter.clone();
        AppController::new(
            ConfigStore::new(self.config_path()),
            BrightnessAdapter::new(
                Box::new(Display {
                    level: self.level.clone(),
                    broken: broken_display,
                }),
                reporter.clone(),
            ),
            AutoStartAdapter::new(Box::new(self.autostart()), reporter.clone(), "\"/usr/bin/bc\""),
            ThemeController::new(Box::new(Appearance(self.appearance.clone())), reporter.clone()),
            reporter,
        )
    }

    fn file_json(&self) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(self.config_path()).unwrap()).unwrap()
    }
}

/// No config → defaults → dark theme → file has dark with auto_start preserved
#[test]
fn test_first_run_then_toggle_dark() {
    let app = App::new();

    let mut controller = app.start(false);
    assert_eq!(controller.state().preferences, Preferences::default());
    assert_eq!(app.file_json()["auto_start"], false);

    controller.select_theme(Theme::Dark);

    let json = app.file_json();
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["auto_start"], false);
    assert_eq!(*app.appearance.borrow(), Some(Theme::Dark));
    assert!(app.reporter.0.borrow().is_empty());
}

#[test]
fn test_preferences_survive_restart() {
    let app = App::new();
    {
        let mut controller = app.start(false);
        controller.set_auto_start(true);
        controller.select_theme(Theme::Light);
    }

    let controller = app.start(false);

    assert_eq!(
        controller.state().preferences,
        Preferences {
            theme: Theme::Light,
            auto_start: true
        }
    );
    assert_eq!(*app.appearance.borrow(), Some(Theme::Light));
    assert!(app.autostart().is_registered(AUTO_START_ENTRY).unwrap());
}

#[test]
fn test_corrupt_config_is_left_alone_until_next_change() {
    let app = App::new();
    std::fs::write(app.config_path(), "not json at all").unwrap();

    let mut controller = app.start(false);

    assert_eq!(controller.state().preferences, Preferences::default());
    assert_eq!(*app.reporter.0.borrow(), vec!["Config Error"]);
    assert_eq!(
        std::fs::read_to_string(app.config_path()).unwrap(),
        "not json at all"
    );

    // The next change overwrites the file in full with a valid document
    controller.set_auto_start(true);
    assert_eq!(app.file_json()["auto_start"], true);
    assert_eq!(app.file_json()["theme"], "system");
}

#[test]
fn test_broken_display_never_stops_the_app() {
    let app = App::new();

    let mut controller = app.start(true);

    assert_eq!(controller.state().brightness, 50);
    assert_eq!(controller.set_brightness(80.0), None);
    controller.select_theme(Theme::Dark);
    assert_eq!(app.file_json()["theme"], "dark");
    assert_eq!(
        *app.reporter.0.borrow(),
        vec!["Brightness Error", "Brightness Error"]
    );
}

#[test]
fn test_brightness_slider_updates_display() {
    let app = App::new();
    let mut controller = app.start(false);
    assert_eq!(controller.state().brightness, 40);

    assert_eq!(controller.set_brightness(99.6), Some(100));
    assert_eq!(app.level.get(), 100);
}

#[test]
fn test_disabling_auto_start_without_entry() {
    let app = App::new();
    let mut controller = app.start(false);

    controller.set_auto_start(false);

    assert!(!app.autostart().is_registered(AUTO_START_ENTRY).unwrap());
    assert!(app.reporter.0.borrow().is_empty());
}

#[test]
fn test_user_friendly_error_messages() {
    let error = BrightnessControllerError::BrightnessError(StringError::new("timeout"));
    let message = get_user_friendly_error(&error);
    assert!(message.contains("brightness"));
    assert!(message.contains("timeout"));

    let error = BrightnessControllerError::ConfigError(StringError::new("read-only"));
    let message = get_user_friendly_error(&error);
    assert!(message.contains("config.json"));
}
