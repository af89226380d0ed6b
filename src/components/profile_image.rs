//! Profile Image Component
//!
//! Avatar with an upload button. The chosen picture is kept in the
//! preferences store and shown again on the next launch.

use std::path::PathBuf;

use dioxus::prelude::*;
use folio_core::{ReadOutcome, SelectedFile};
use rfd::FileDialog;

use super::alert::alert;
use crate::context::use_profile_image;

/// Profile picture with placeholder initials
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ProfileImage { initials: "AR".to_string() }
/// }
/// ```
#[component]
pub fn ProfileImage(
    /// Shown until a picture is uploaded
    initials: String,
) -> Element {
    let mut widget = use_profile_image();

    let handle_upload = move |_| {
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .add_filter("all files", &["*"])
                    .set_title("Choose a profile picture")
                    .pick_file()
            })
            .await;

            let path = match picked {
                Ok(path) => path,
                Err(e) => {
                    tracing::error!("File picker error: {:?}", e);
                    return;
                }
            };

            let selection = match path {
                Some(path) => match SelectedFile::from_path(&path).await {
                    Ok(file) => Some((path, file)),
                    Err(e) => {
                        tracing::error!("Failed to inspect {}: {}", path.display(), e);
                        alert("Failed to open the selected file").await;
                        return;
                    }
                },
                None => None,
            };

            let ticket = widget
                .write()
                .handle_file_selection(selection.as_ref().map(|(_, file)| file));

            let (path, ticket) = match (selection, ticket) {
                (Some((path, _)), Ok(Some(ticket))) => (path, ticket),
                (_, Err(e)) => {
                    alert(e.to_string()).await;
                    return;
                }
                // User cancelled
                _ => return,
            };

            read_and_apply(widget, path, ticket).await;
        });
    };

    let state = widget.read();
    let view = state.view();
    let src = view.src.unwrap_or_default();

    rsx! {
        div {
            class: if view.has_image { "profile-image-container has-image" } else { "profile-image-container" },

            img {
                id: "profile-image",
                class: "profile-image",
                src: "{src}",
                alt: "Profile picture",
                style: if view.image_visible { "display: block;" } else { "display: none;" },
            }

            div {
                id: "profile-placeholder",
                class: "profile-placeholder",
                style: if view.placeholder_visible { "display: flex;" } else { "display: none;" },
                "{initials}"
            }

            button {
                id: "profile-upload",
                class: "profile-upload-btn",
                onclick: handle_upload,
                title: "Change picture",
                "📷"
            }
        }
    }
}

/// Read the accepted file and hand the bytes back to the widget.
async fn read_and_apply(
    mut widget: Signal<crate::context::ProfileImageState>,
    path: PathBuf,
    ticket: folio_core::ReadTicket,
) {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            alert("Failed to read the selected image").await;
            return;
        }
    };

    let outcome = widget.write().complete_read(ticket, &bytes);
    match outcome {
        Ok(ReadOutcome::Applied(_)) => {}
        Ok(ReadOutcome::Stale) => {
            tracing::debug!("Ignoring read of {} superseded by a newer pick", path.display());
        }
        Err(e) => {
            tracing::error!("Failed to save profile image: {}", e);
        }
    }
}
