//! Folio Core Library
//!
//! Page state for a single-page personal portfolio.
//!
//! ## Overview
//!
//! Every interactive behavior of the portfolio page lives here as plain,
//! testable state. The desktop UI owns the DOM and only projects this state
//! into classes and attributes:
//!
//! - **Profile image**: validated upload, data-URL encoding, persistence under
//!   a single durable key, restore on launch
//! - **Project modal**: open by project id, close by button, backdrop or Escape
//! - **Navigation**: mobile menu, navbar tone, active section, anchor offsets
//! - **Viewport**: fade-in reveal and lazy image loading
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ProfileImageWidget, SelectedFile, Storage};
//!
//! let storage = Storage::new("~/.local/share/folio/folio.redb")?;
//! let mut widget = ProfileImageWidget::new(storage);
//! widget.restore_on_load()?;
//!
//! let file = SelectedFile::from_path("me.png").await?;
//! if let Some(ticket) = widget.handle_file_selection(Some(&file))? {
//!     let bytes = tokio::fs::read("me.png").await?;
//!     widget.complete_read(ticket, &bytes)?;
//! }
//! ```

pub mod clipboard;
pub mod content;
pub mod error;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod profile_image;
pub mod storage;
pub mod types;
pub mod viewport;

// Re-exports
pub use clipboard::{CopyButtonState, CopyFeedback, COPY_FEEDBACK_DURATION};
pub use content::PortfolioContent;
pub use error::{FolioError, FolioResult, UploadError};
pub use modal::{ClickTarget, ModalController, ModalState, ProjectCatalog};
pub use nav::{anchor_scroll_target, ActiveSection, NavMenu, NavbarTone, SectionBounds};
pub use profile_image::{
    ProfileImageView, ProfileImageWidget, ReadOutcome, ReadTicket, MAX_IMAGE_BYTES,
    PROFILE_IMAGE_KEY,
};
pub use storage::{KeyValueStore, MemoryStore, SharedStore, Storage};
pub use types::*;
pub use viewport::{ElementRect, LazyImage, RevealSet, Viewport};
