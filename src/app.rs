use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{MemoryStore, ModalController, ProfileImageWidget, SharedStore, Storage};

use crate::context::{PageState, ProfileImageState};
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;
use crate::Settings;

/// Root application component.
///
/// Provides global styles and the page state, then renders the portfolio.
#[component]
pub fn App() -> Element {
    let settings = use_hook(crate::get_settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(settings) = settings {
            Shell { settings }
        } else {
            div { class: "startup-error", "Launch settings are missing." }
        }
    }
}

/// Owns the widgets for one run of the page.
#[component]
fn Shell(settings: Settings) -> Element {
    let content = use_signal(|| settings.content.clone());
    let store = use_hook(|| open_store(&settings.data_dir));

    let profile_image: Signal<ProfileImageState> = use_signal(|| {
        let mut widget = ProfileImageWidget::new(store.clone());
        if let Err(e) = widget.restore_on_load() {
            tracing::error!("Failed to restore profile image: {}", e);
        }
        widget
    });
    let modal = use_signal(|| ModalController::new(settings.content.catalog()));
    let page = use_hook(PageState::new);

    use_context_provider(|| content);
    use_context_provider(|| profile_image);
    use_context_provider(|| modal);
    use_context_provider(|| page);

    rsx! {
        Portfolio {}
    }
}

/// Open the preferences database, falling back to memory so the page
/// still works (without persistence) when the file is unavailable.
fn open_store(data_dir: &Path) -> SharedStore {
    match Storage::new(data_dir.join("folio.redb")) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(
                "Failed to open preferences in {}: {}; profile image will not persist",
                data_dir.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}
