//! About dialog
//!
//! A borderless, fixed-size window centered over the main window. While it is
//! open the main window's controls are disabled, which makes it modal.

use crate::{AboutDialog, MainWindow};
use brightness_controller::config::Theme;
use brightness_controller::error::{BrightnessControllerError, ErrorReporter};
use brightness_controller::utils::placement::centered_origin;
use slint::{CloseRequestResponse, ComponentHandle};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Logical size of the dialog, matching `ui/about.slint`
const ABOUT_SIZE: (f32, f32) = (450.0, 250.0);

/// Author shown in the dialog
pub const AUTHOR: &str = "Muhammad Abubakar Siddique Ansari";
/// Author's GitHub profile
pub const GITHUB_URL: &str = "https://github.com/Ansari-Codes";
/// Author's portfolio
pub const PORTFOLIO_URL: &str = "https://ansari-codes.github.io/portfolio/";

/// Build and show the About dialog over `main`
///
/// Returns the dialog so the caller can keep it alive; `None` if it could not
/// be created, in which case a `DialogError` has been reported.
pub fn show(
    main: &MainWindow,
    icon: Option<&slint::Image>,
    theme: Theme,
    reporter: &dyn ErrorReporter,
) -> Option<AboutDialog> {
    let dialog = match AboutDialog::new() {
        Ok(dialog) => dialog,
        Err(e) => {
            reporter.report(BrightnessControllerError::DialogError(Box::new(e)));
            return None;
        }
    };

    dialog.set_version(env!("CARGO_PKG_VERSION").into());
    dialog.set_author(AUTHOR.into());
    if let Some(icon) = icon {
        dialog.set_app_icon(icon.clone());
        dialog.set_has_icon(true);
    }
    dialog.invoke_apply_color_scheme(theme.as_str().into());

    dialog.on_open_github(|| open_link(GITHUB_URL));
    dialog.on_open_portfolio(|| open_link(PORTFOLIO_URL));

    let dialog_weak = dialog.as_weak();
    let main_weak = main.as_weak();
    dialog.on_close_clicked(move || {
        if let Some(dialog) = dialog_weak.upgrade() {
            if let Err(e) = dialog.hide() {
                warn!("Failed to hide About dialog: {e}");
            }
        }
        if let Some(main) = main_weak.upgrade() {
            main.set_dialog_open(false);
        }
    });

    // Closing through the window manager (e.g. Alt+F4) must re-enable the main window too
    let main_weak = main.as_weak();
    dialog.window().on_close_requested(move || {
        if let Some(main) = main_weak.upgrade() {
            main.set_dialog_open(false);
        }
        CloseRequestResponse::HideWindow
    });

    center_over(main, &dialog);

    if let Err(e) = dialog.show() {
        reporter.report(BrightnessControllerError::DialogError(Box::new(e)));
        return None;
    }

    main.set_dialog_open(true);
    info!("About dialog opened");
    Some(dialog)
}

/// Hide the About dialog held in `about` whenever `main` is closed
///
/// The event loop only ends once every window is hidden, so an open dialog
/// would otherwise outlive the main window.
pub fn close_with_main(main: &MainWindow, about: Rc<RefCell<Option<AboutDialog>>>) {
    main.window().on_close_requested(move || {
        if let Some(dialog) = about.borrow_mut().take() {
            if let Err(e) = dialog.hide() {
                warn!("Failed to hide About dialog: {e}");
            }
        }
        CloseRequestResponse::HideWindow
    });
}

/// Position `dialog` in the middle of `main`
fn center_over(main: &MainWindow, dialog: &AboutDialog) {
    let main_window = main.window();
    let scale = main_window.scale_factor();
    let position = main_window.position();
    let size = main_window.size();

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "dialog size times scale factor is a small positive pixel count"
    )]
    let child = (
        (ABOUT_SIZE.0 * scale).round() as u32,
        (ABOUT_SIZE.1 * scale).round() as u32,
    );

    let (x, y) = centered_origin(
        (position.x, position.y),
        (size.width, size.height),
        child,
    );
    debug!("Placing About dialog at ({x}, {y})");
    dialog
        .window()
        .set_position(slint::PhysicalPosition::new(x, y));
}

/// Open `url` in the default browser
fn open_link(url: &str) {
    info!("Opening {url}");
    if let Err(e) = open::that(url) {
        warn!("Failed to open {url}: {e}");
    }
}
