//! Blocking user-facing notifications.

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Show a warning dialog over the main window and wait for the user to
/// dismiss it. The window does not take input while the dialog is open.
pub async fn alert(message: impl Into<String>) {
    let message = message.into();
    tracing::debug!(%message, "showing alert");

    let desktop = dioxus::desktop::window();
    AsyncMessageDialog::new()
        .set_parent(&desktop.window)
        .set_level(MessageLevel::Warning)
        .set_title("Portfolio")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
