//! Error reporting for the GUI
//!
//! User-facing errors (rejected input, unusable import files) get an
//! `AlertDialog`; everything else is only logged.

use gtk4::{AlertDialog, Window};
use std::fmt::Display;

/// Shows `error` to the user if `user_facing`, otherwise logs it
pub(crate) fn report_error(
    parent: Option<&Window>,
    heading: &str,
    error: &impl Display,
    user_facing: bool,
) {
    if !user_facing {
        tracing::error!("{}: {}", heading, error);
        return;
    }

    tracing::warn!("{}: {}", heading, error);

    let dialog = AlertDialog::builder()
        .modal(true)
        .message(heading)
        .detail(error.to_string())
        .build();
    dialog.show(parent);
}
