//! Profile image persistence widget.
//!
//! Upload flow:
//!
//! ```text
//! handle_file_selection(file) ──validate──> ReadTicket
//!                                              │  (caller reads bytes, async)
//!                                              ▼
//!                        complete_read(ticket, bytes) ──> display + store
//! ```
//!
//! Only the latest ticket may complete; an older read finishing late is
//! discarded. On launch, [`ProfileImageWidget::restore_on_load`] shows the
//! stored image without re-validating it.

use crate::error::{FolioError, UploadError};
use crate::storage::KeyValueStore;
use crate::types::{EncodedImage, SelectedFile};

/// Durable-store key holding the encoded profile image.
pub const PROFILE_IMAGE_KEY: &str = "profileImage";

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Handle for one outstanding file read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTicket {
    sequence: u64,
    mime_type: String,
}

impl ReadTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// Result of handing read bytes back to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Image displayed and stored
    Applied(EncodedImage),
    /// A newer selection superseded this read; nothing changed
    Stale,
}

/// What the page should render for the profile image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImageView<'a> {
    pub src: Option<&'a str>,
    pub image_visible: bool,
    pub placeholder_visible: bool,
    /// Projected as the `has-image` class on the container
    pub has_image: bool,
}

/// Profile image upload and persistence.
pub struct ProfileImageWidget<S> {
    store: S,
    image: Option<EncodedImage>,
    latest_read: u64,
}

impl<S: KeyValueStore> ProfileImageWidget<S> {
    /// Create an empty widget backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            image: None,
            latest_read: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Currently displayed image, if any.
    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn view(&self) -> ProfileImageView<'_> {
        let has_image = self.image.is_some();
        ProfileImageView {
            src: self.image.as_ref().map(EncodedImage::as_str),
            image_visible: has_image,
            placeholder_visible: !has_image,
            has_image,
        }
    }

    /// Validate a picked file and issue a ticket for reading it.
    ///
    /// `None` (picker cancelled) is a no-op. On error nothing changes, not
    /// even the read sequence, so an outstanding read stays current.
    pub fn handle_file_selection(
        &mut self,
        file: Option<&SelectedFile>,
    ) -> Result<Option<ReadTicket>, UploadError> {
        let Some(file) = file else {
            return Ok(None);
        };

        validate(file)?;

        self.latest_read += 1;
        tracing::debug!(
            sequence = self.latest_read,
            mime_type = %file.mime_type,
            byte_size = file.byte_size,
            "profile image accepted, reading"
        );

        Ok(Some(ReadTicket {
            sequence: self.latest_read,
            mime_type: file.mime_type.clone(),
        }))
    }

    /// Finish a read started by [`handle_file_selection`].
    ///
    /// The display is updated before the store write, so a store failure
    /// still leaves the new image visible for this session.
    ///
    /// [`handle_file_selection`]: Self::handle_file_selection
    pub fn complete_read(
        &mut self,
        ticket: ReadTicket,
        bytes: &[u8],
    ) -> Result<ReadOutcome, FolioError> {
        if ticket.sequence != self.latest_read {
            tracing::debug!(
                sequence = ticket.sequence,
                latest = self.latest_read,
                "discarding stale profile image read"
            );
            return Ok(ReadOutcome::Stale);
        }

        let encoded = EncodedImage::from_bytes(&ticket.mime_type, bytes);
        self.image = Some(encoded.clone());
        self.store.set(PROFILE_IMAGE_KEY, encoded.as_str())?;

        tracing::info!(bytes = bytes.len(), "profile image updated");
        Ok(ReadOutcome::Applied(encoded))
    }

    /// Show the stored image, if one exists. Returns whether one was found.
    pub fn restore_on_load(&mut self) -> Result<bool, FolioError> {
        match self.store.get(PROFILE_IMAGE_KEY)? {
            Some(saved) => {
                self.image = Some(EncodedImage::from_stored(saved));
                tracing::debug!("restored saved profile image");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Ordered validation; the first failing rule wins.
pub fn validate(file: &SelectedFile) -> Result<(), UploadError> {
    if !file.mime_type.starts_with("image/") {
        return Err(UploadError::InvalidType {
            mime_type: file.mime_type.clone(),
        });
    }

    if file.byte_size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge {
            byte_size: file.byte_size,
        });
    }

    Ok(())
}
