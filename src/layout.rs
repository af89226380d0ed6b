//! Scroll measurement.
//!
//! Tracked elements are measured against the page container whenever it
//! scrolls or resizes, and again as each one mounts. The results feed the
//! navbar tone, the active nav link, fade-in reveal and lazy images.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{anchor_scroll_target, ElementRect, NavbarTone, SectionBounds, Viewport};

use crate::context::{PageState, TrackedKind};

/// DOM id of the scrolling page container.
pub const PAGE_ID: &str = "page";

struct Frame {
    scroll_y: f64,
    origin_y: f64,
    viewport: Viewport,
}

async fn measure_frame(page: &PageState) -> Option<Frame> {
    let container = page.container.peek().as_ref().cloned()?;
    let offset = container.get_scroll_offset().await.ok()?;
    let rect = container.get_client_rect().await.ok()?;
    Some(Frame {
        scroll_y: offset.y,
        origin_y: rect.origin.y,
        viewport: Viewport::new(rect.size.height),
    })
}

/// Re-measure every tracked element and update the scroll-driven state.
pub async fn refresh_layout(mut page: PageState) {
    let Some(frame) = measure_frame(&page).await else {
        return;
    };

    let tracked = page.tracked.peek().clone();
    let mut sections = Vec::new();
    let mut reveals = Vec::new();
    let mut lazy = Vec::new();

    for item in tracked {
        let Ok(rect) = item.node.get_client_rect().await else {
            continue;
        };
        let rect = ElementRect::new(rect.origin.y - frame.origin_y, rect.size.height);
        match item.kind {
            TrackedKind::Section => sections.push(SectionBounds::new(
                item.id,
                rect.top + frame.scroll_y,
                rect.height,
            )),
            TrackedKind::Reveal => reveals.push((item.id, rect)),
            TrackedKind::LazyImage => lazy.push((item.id, rect)),
        }
    }
    sections.sort_by(|a, b| a.offset_top.total_cmp(&b.offset_top));

    let tone = NavbarTone::for_scroll(frame.scroll_y);
    if *page.tone.peek() != tone {
        page.tone.set(tone);
    }

    let mut active = page.active.peek().clone();
    if active.update(frame.scroll_y, &sections) {
        page.active.set(active);
    }

    let mut revealed = page.revealed.peek().clone();
    let mut any_revealed = false;
    for (id, rect) in &reveals {
        any_revealed |= revealed.observe(id, *rect, frame.viewport);
    }
    if any_revealed {
        page.revealed.set(revealed);
    }

    let mut images = page.lazy_images.peek().clone();
    let mut any_loaded = false;
    for (id, rect) in &lazy {
        if let Some(image) = images.get_mut(id) {
            if image.observe(*rect, frame.viewport) {
                tracing::trace!(image = %id, "lazy image entered view");
                any_loaded = true;
            }
        }
    }
    if any_loaded {
        page.lazy_images.set(images);
    }
}

/// Register a mounted element and re-measure with it included.
pub fn track_element(mut page: PageState, id: String, kind: TrackedKind, node: Rc<MountedData>) {
    page.track(id, kind, node);
    spawn(refresh_layout(page));
}

/// Smoothly scroll the page so section `id` sits just below the navbar.
///
/// Unknown ids are ignored.
pub async fn scroll_to_section(page: PageState, id: String) {
    let target = page
        .tracked
        .peek()
        .iter()
        .find(|t| t.kind == TrackedKind::Section && t.id == id)
        .map(|t| t.node.clone());
    let Some(node) = target else {
        return;
    };
    let Some(frame) = measure_frame(&page).await else {
        return;
    };
    let Ok(rect) = node.get_client_rect().await else {
        return;
    };

    let offset_top = rect.origin.y - frame.origin_y + frame.scroll_y;
    let top = anchor_scroll_target(offset_top);
    tracing::debug!(section = %id, top, "scrolling to section");

    let _ = dioxus::document::eval(&format!(
        "document.getElementById('{PAGE_ID}').scrollTo({{ top: {top}, behavior: 'smooth' }});"
    ));
}
