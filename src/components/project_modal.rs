//! Project Details Modal Component
//!
//! Overlay showing the rendered details of one project.

use dioxus::prelude::*;
use folio_core::ClickTarget;

use crate::context::use_modal;

/// Project details modal.
///
/// Open/closed state lives in the shared [`folio_core::ModalController`];
/// this component only renders it. Escape is handled at the page root.
#[component]
pub fn ProjectModal() -> Element {
    let mut modal = use_modal();

    let controller = modal.read();
    let open = controller.is_open();
    let markup = controller.content().to_string();
    drop(controller);

    rsx! {
        div {
            id: "project-modal",
            class: if open { "modal active" } else { "modal" },
            onclick: move |_| modal.write().click(ClickTarget::Backdrop),

            div {
                class: "modal-dialog",
                onclick: move |e| {
                    e.stop_propagation();
                    modal.write().click(ClickTarget::Content);
                },

                button {
                    id: "modal-close",
                    class: "modal-close",
                    onclick: move |e| {
                        e.stop_propagation();
                        modal.write().close();
                    },
                    "aria-label": "Close",
                    "×"
                }

                div {
                    id: "modal-content",
                    class: "modal-content",
                    dangerous_inner_html: "{markup}",
                }
            }
        }
    }
}

/// Button on a project card that opens its details.
#[component]
pub fn DetailsButton(project_id: String) -> Element {
    let mut modal = use_modal();

    rsx! {
        button {
            class: "btn btn-details",
            "data-project": "{project_id}",
            onclick: move |_| {
                // projects without a details record simply do nothing
                modal.write().open(&project_id);
            },
            "View Details"
        }
    }
}
