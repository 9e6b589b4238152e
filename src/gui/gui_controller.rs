//! GUI controller
//!
//! Creates the main window, builds the `AppController` with the platform
//! adapters, mirrors its state into the window and wires each window callback
//! to exactly one controller method.

use crate::gui::about;
use crate::gui::reporter::DialogReporter;
use crate::MainWindow;
use brightness_controller::brightness::{self, BrightnessAdapter};
use brightness_controller::config::{ConfigStore, Theme};
use brightness_controller::controller::{AppController, AppearanceSink, ThemeController};
use brightness_controller::error::{BrightnessControllerError, ErrorReporter, Result, StringError};
use brightness_controller::utils::{self, AutoStartAdapter, IconPixels, autostart};
use slint::{ComponentHandle, SharedPixelBuffer};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// Applies appearance modes to the main window
struct SlintAppearance {
    window: slint::Weak<MainWindow>,
}

impl AppearanceSink for SlintAppearance {
    fn set_appearance(&self, theme: Theme) -> Result<()> {
        let window = self.window.upgrade().ok_or_else(|| {
            BrightnessControllerError::ThemeError(StringError::new(
                "the main window is no longer available",
            ))
        })?;
        window.invoke_apply_color_scheme(theme.as_str().into());
        window.set_theme(theme.as_str().into());
        Ok(())
    }
}

/// Owns the main window and the application controller
pub struct GuiController {
    window: MainWindow,
    controller: Rc<RefCell<AppController>>,
    /// Keeps the About dialog alive while it is shown
    about: Rc<RefCell<Option<crate::AboutDialog>>>,
    icon: Option<slint::Image>,
    reporter: Rc<dyn ErrorReporter>,
}

impl GuiController {
    /// Create the window and restore the persisted state into it
    pub fn new() -> std::result::Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        let reporter: Rc<dyn ErrorReporter> = Rc::new(DialogReporter);

        let icon = match utils::load_app_icon() {
            Ok(pixels) => Some(to_slint_image(&pixels)),
            Err(e) => {
                reporter.report(e);
                None
            }
        };
        if let Some(icon) = &icon {
            window.set_app_icon(icon.clone());
        }

        let controller = AppController::new(
            ConfigStore::at_default_location(),
            BrightnessAdapter::new(brightness::default_backend(), Rc::clone(&reporter)),
            AutoStartAdapter::for_current_exe(autostart::default_backend(), Rc::clone(&reporter)),
            ThemeController::new(
                Box::new(SlintAppearance {
                    window: window.as_weak(),
                }),
                Rc::clone(&reporter),
            ),
            Rc::clone(&reporter),
        );

        let state = *controller.state();
        window.set_brightness(f32::from(state.brightness));
        window.set_level(i32::from(state.brightness));
        window.set_theme(state.preferences.theme.as_str().into());
        window.set_auto_start(state.preferences.auto_start);

        let gui = Self {
            window,
            controller: Rc::new(RefCell::new(controller)),
            about: Rc::new(RefCell::new(None)),
            icon,
            reporter,
        };
        gui.setup_callbacks();

        info!("Main window initialized");
        Ok(gui)
    }

    fn setup_callbacks(&self) {
        let controller = Rc::clone(&self.controller);
        let window_weak = self.window.as_weak();
        self.window.on_brightness_changed(move |value| {
            let applied = controller.borrow_mut().set_brightness(value);
            if let (Some(level), Some(window)) = (applied, window_weak.upgrade()) {
                window.set_level(i32::from(level));
            }
        });

        let controller = Rc::clone(&self.controller);
        self.window.on_theme_selected(move |label| match label.parse::<Theme>() {
            Ok(theme) => controller.borrow_mut().select_theme(theme),
            Err(e) => warn!("Ignoring theme selection: {e}"),
        });

        let controller = Rc::clone(&self.controller);
        self.window.on_auto_start_toggled(move |enabled| {
            controller.borrow_mut().set_auto_start(enabled);
        });

        about::close_with_main(&self.window, Rc::clone(&self.about));

        let controller = Rc::clone(&self.controller);
        let about = Rc::clone(&self.about);
        let icon = self.icon.clone();
        let reporter = Rc::clone(&self.reporter);
        let window_weak = self.window.as_weak();
        self.window.on_about_clicked(move || {
            let Some(window) = window_weak.upgrade() else {
                return;
            };
            let theme = controller.borrow().state().preferences.theme;
            let dialog = about::show(&window, icon.as_ref(), theme, reporter.as_ref());
            // Replacing drops a previously closed dialog
            *about.borrow_mut() = dialog;
        });
    }

    /// Show the main window and run the event loop until it is closed
    pub fn run(&self) -> std::result::Result<(), slint::PlatformError> {
        info!("Starting GUI event loop");
        self.window.run()
    }
}

/// Wrap decoded icon pixels as a Slint image
fn to_slint_image(pixels: &IconPixels) -> slint::Image {
    let buffer = SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
        &pixels.rgba,
        pixels.width,
        pixels.height,
    );
    slint::Image::from_rgba8(buffer)
}
