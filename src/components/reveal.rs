//! Scroll-observed wrappers: page sections, fade-in blocks and lazy images.
//!
//! Each registers its mounted element with the page so the scroll handler
//! can measure it.

use dioxus::prelude::*;
use folio_core::LazyImage;

use crate::context::{use_page, TrackedKind};
use crate::layout::track_element;

/// Page section that anchors a nav link.
#[component]
pub fn PageSection(id: String, #[props(default)] class: String, children: Element) -> Element {
    let page = use_page();
    let section_id = id.clone();

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |evt: MountedEvent| {
                track_element(page, section_id.clone(), TrackedKind::Section, evt.data());
            },
            {children}
        }
    }
}

/// Block that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(id: String, class: String, children: Element) -> Element {
    let page = use_page();
    let class_name = if page.revealed.read().is_revealed(&id) {
        format!("{class} reveal visible")
    } else {
        format!("{class} reveal")
    };
    let tracked_id = id.clone();

    rsx! {
        div {
            class: "{class_name}",
            onmounted: move |evt: MountedEvent| {
                track_element(page, tracked_id.clone(), TrackedKind::Reveal, evt.data());
            },
            {children}
        }
    }
}

/// Image whose source is only set once it scrolls into view.
#[component]
pub fn LazyImg(id: String, data_src: String, alt: String) -> Element {
    let mut page = use_page();

    let registered_id = id.clone();
    let initial_src = data_src.clone();
    use_hook(move || {
        page.lazy_images
            .write()
            .entry(registered_id)
            .or_insert_with(|| LazyImage::new(initial_src));
    });

    let src = page
        .lazy_images
        .read()
        .get(&id)
        .and_then(|image| image.src().map(str::to_string));
    let tracked_id = id.clone();

    rsx! {
        if let Some(src) = src {
            img {
                class: "project-image",
                src: "{src}",
                alt: "{alt}",
                onmounted: move |evt: MountedEvent| {
                    track_element(page, tracked_id.clone(), TrackedKind::LazyImage, evt.data());
                },
            }
        } else {
            img {
                class: "project-image pending",
                "data-src": "{data_src}",
                alt: "{alt}",
                onmounted: move |evt: MountedEvent| {
                    track_element(page, tracked_id.clone(), TrackedKind::LazyImage, evt.data());
                },
            }
        }
    }
}
