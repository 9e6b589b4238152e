//! Native message boxes for reported errors

use brightness_controller::error::{BrightnessControllerError, ErrorReporter, get_user_friendly_error};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::time::Duration;
use tracing::{error, warn};

/// Reporter that logs errors and shows them in a message box
///
/// The message box is opened on the next turn of the event loop. Errors are
/// usually reported from inside a controller call, and a modal box spins its
/// own message loop; deferring keeps that loop from re-entering callbacks
/// while the controller is still borrowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogReporter;

impl ErrorReporter for DialogReporter {
    fn report(&self, err: BrightnessControllerError) {
        let title = err.title();
        let level = if err.is_warning() {
            warn!("{title}: {err}");
            MessageLevel::Warning
        } else {
            error!("{title}: {err}");
            MessageLevel::Error
        };
        let message = get_user_friendly_error(&err);

        slint::Timer::single_shot(Duration::ZERO, move || {
            show_message(title, &message, level);
        });
    }
}

/// Show a blocking message box
pub fn show_message(title: &str, message: &str, level: MessageLevel) {
    MessageDialog::new()
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .set_level(level)
        .show();
}
