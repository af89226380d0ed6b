//! Core types for Folio

pub mod image;
pub mod project;

pub use self::image::{EncodedImage, SelectedFile};
pub use self::project::ProjectDetailRecord;
