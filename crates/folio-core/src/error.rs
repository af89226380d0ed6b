//! Error types for Folio

use thiserror::Error;

/// Rejection of a selected profile image.
///
/// Both variants abort the upload before any state changes. The display
/// strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Media type does not start with `image/`
    #[error("Please select an image file")]
    InvalidType { mime_type: String },

    /// File exceeds the 5 MiB limit
    #[error("Image size should be less than 5MB")]
    TooLarge { byte_size: u64 },
}

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Selected file failed validation
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_messages() {
        let err = UploadError::InvalidType {
            mime_type: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), "Please select an image file");

        let err = UploadError::TooLarge { byte_size: 6_000_000 };
        assert_eq!(err.to_string(), "Image size should be less than 5MB");
    }

    #[test]
    fn test_upload_error_is_transparent() {
        let err: FolioError = UploadError::TooLarge { byte_size: 1 }.into();
        assert_eq!(err.to_string(), "Image size should be less than 5MB");
        assert!(matches!(err, FolioError::Upload(UploadError::TooLarge { .. })));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
