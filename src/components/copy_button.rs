//! Copy-to-clipboard button with temporary "Copied!" feedback.

use dioxus::prelude::*;
use folio_core::clipboard::CopyButtonState;
use folio_core::COPY_FEEDBACK_DURATION;

use super::alert::alert;

/// Button that places `text` on the system clipboard.
///
/// # Example
///
/// ```rust
/// rsx! {
///     CopyButton { text: "alex@example.com".to_string() }
/// }
/// ```
#[component]
pub fn CopyButton(
    /// Text placed on the clipboard
    text: String,
    /// Resting button label
    #[props(default = "Copy".to_string())]
    label: String,
) -> Element {
    let mut state = use_signal(CopyButtonState::default);

    let on_click = move |_| {
        if text.is_empty() {
            return;
        }

        // arboard talks to the desktop clipboard directly
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&text));
        let generation = state.write().record(result.is_ok());

        match result {
            Ok(()) => {
                spawn(async move {
                    tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
                    state.write().revert(generation);
                });
            }
            Err(e) => {
                tracing::error!("Failed to copy text: {}", e);
                spawn(async move {
                    alert("Failed to copy to clipboard").await;
                    state.write().revert(generation);
                });
            }
        }
    };

    let feedback = state().feedback();

    rsx! {
        button {
            class: if feedback.is_highlighted() { "copy-btn copied" } else { "copy-btn" },
            onclick: on_click,
            "{feedback.label(&label)}"
        }
    }
}
