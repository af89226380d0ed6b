//! Shared page state for Folio components.
//!
//! The App component owns the widgets and provides them via context:
//!
//! ```ignore
//! // In child components
//! let mut modal = use_modal();
//! modal.write().open("ledger");
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    ActiveSection, LazyImage, ModalController, NavbarTone, PortfolioContent, ProfileImageWidget,
    RevealSet, SharedStore,
};

/// Profile image widget over the app's durable store.
pub type ProfileImageState = ProfileImageWidget<SharedStore>;

/// What a mounted element is measured for on scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedKind {
    /// Page section; drives the active nav link and anchor scrolling
    Section,
    /// Fades in once visible
    Reveal,
    /// Deferred image source
    LazyImage,
}

/// A mounted element registered for scroll measurement.
#[derive(Clone)]
pub struct Tracked {
    pub id: String,
    pub kind: TrackedKind,
    pub node: Rc<MountedData>,
}

/// Scroll-driven page state.
#[derive(Clone, Copy)]
pub struct PageState {
    /// The scrolling page container
    pub container: Signal<Option<Rc<MountedData>>>,
    pub tracked: Signal<Vec<Tracked>>,
    pub tone: Signal<NavbarTone>,
    pub active: Signal<ActiveSection>,
    pub revealed: Signal<RevealSet>,
    pub lazy_images: Signal<HashMap<String, LazyImage>>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            container: Signal::new(None),
            tracked: Signal::new(Vec::new()),
            tone: Signal::new(NavbarTone::default()),
            active: Signal::new(ActiveSection::default()),
            revealed: Signal::new(RevealSet::default()),
            lazy_images: Signal::new(HashMap::new()),
        }
    }

    /// Register (or re-register after a remount) a measured element.
    pub fn track(&mut self, id: String, kind: TrackedKind, node: Rc<MountedData>) {
        let mut tracked = self.tracked.write();
        tracked.retain(|t| !(t.id == id && t.kind == kind));
        tracked.push(Tracked { id, kind, node });
    }
}

/// Hook to access the page content.
pub fn use_content() -> Signal<PortfolioContent> {
    use_context::<Signal<PortfolioContent>>()
}

/// Hook to access the profile image widget.
pub fn use_profile_image() -> Signal<ProfileImageState> {
    use_context::<Signal<ProfileImageState>>()
}

/// Hook to access the project details modal.
pub fn use_modal() -> Signal<ModalController> {
    use_context::<Signal<ModalController>>()
}

/// Hook to access scroll-driven page state.
pub fn use_page() -> PageState {
    use_context::<PageState>()
}
