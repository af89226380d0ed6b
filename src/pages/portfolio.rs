//! Portfolio page - the whole single-page site.
//!
//! The page container is the scroll root: scroll and resize events
//! re-measure tracked elements, and key presses reach the project modal
//! from here.

use dioxus::prelude::*;

use crate::components::{
    AboutSection, ContactSection, HeroSection, NavBar, ProjectModal, ProjectsSection,
    SkillsSection,
};
use crate::context::{use_content, use_modal, use_page};
use crate::layout::{refresh_layout, PAGE_ID};

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    let content = use_content();
    let mut modal = use_modal();
    let mut page = use_page();

    let brand = content.read().owner.name.clone();
    let scroll_locked = !modal.read().scroll_enabled();

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape && modal.peek().is_open() && modal.write().handle_escape() {
            evt.prevent_default();
        }
    };

    rsx! {
        div {
            class: "app-root",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,

            div {
                id: PAGE_ID,
                class: if scroll_locked { "page scroll-locked" } else { "page" },
                onmounted: move |evt: MountedEvent| {
                    page.container.set(Some(evt.data()));
                    // first pass reveals whatever is already above the fold
                    spawn(refresh_layout(page));
                },
                onscroll: move |_| {
                    spawn(refresh_layout(page));
                },
                onresize: move |_| {
                    spawn(refresh_layout(page));
                },

                NavBar { brand }

                main {
                    HeroSection {}
                    AboutSection {}
                    SkillsSection {}
                    ProjectsSection {}
                    ContactSection {}
                }

                footer { class: "footer",
                    p { "Built with Rust and Dioxus." }
                }
            }

            ProjectModal {}
        }
    }
}
