//! Profile image types.
//!
//! A picked file is described by a [`SelectedFile`] until validation passes;
//! its bytes then become an [`EncodedImage`], a `data:` URL that works both
//! as an `img` source and as a stored string.

use std::fmt;
use std::path::Path;

use base64::Engine;

/// Media type reported for files whose extension maps to no known type.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Metadata of a file chosen in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub mime_type: String,
    pub byte_size: u64,
}

impl SelectedFile {
    pub fn new(mime_type: impl Into<String>, byte_size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            byte_size,
        }
    }

    /// Describe a file on disk without reading its contents.
    ///
    /// The media type comes from the file extension, the same way a browser
    /// file input reports it.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Self {
            mime_type: mime_type_for_path(path).to_string(),
            byte_size: metadata.len(),
        })
    }
}

/// Guess a media type from a path's extension.
///
/// Vector and camera formats (`.svg`, `.heic`) map to their `image/*` types
/// even though nothing here decodes them.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// Base64 data URL holding image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Encode raw bytes as `data:<mime>;base64,<payload>`.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{};base64,{}", mime_type, payload))
    }

    /// Wrap a previously stored value. No validation is performed.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type embedded in the URL header, if the value is a data URL.
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?;
        let end = header.find([';', ','])?;
        Some(&header[..end])
    }
}

impl AsRef<str> for EncodedImage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        let img = EncodedImage::from_bytes("image/png", b"Hello");
        assert_eq!(img.as_str(), "data:image/png;base64,SGVsbG8=");
        assert_eq!(img.mime_type(), Some("image/png"));
    }

    #[test]
    fn test_encode_padding() {
        assert_eq!(
            EncodedImage::from_bytes("image/gif", b"a").as_str(),
            "data:image/gif;base64,YQ=="
        );
        assert_eq!(
            EncodedImage::from_bytes("image/gif", b"abc").as_str(),
            "data:image/gif;base64,YWJj"
        );
    }

    #[test]
    fn test_stored_value_is_trusted() {
        let img = EncodedImage::from_stored("not a data url".to_string());
        assert_eq!(img.as_str(), "not a data url");
        assert_eq!(img.mime_type(), None);
    }

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("me.png")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("me.JPG")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_type_for_path(Path::new("no_extension")), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn test_svg_maps_to_image_type() {
        assert_eq!(mime_type_for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(mime_type_for_path(Path::new("LOGO.SVG")), "image/svg+xml");
    }

    #[tokio::test]
    async fn test_from_path_reads_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("avatar.webp");
        std::fs::write(&path, vec![0u8; 1234]).unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file, SelectedFile::new("image/webp", 1234));
    }

    #[tokio::test]
    async fn test_from_path_svg() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("avatar.svg");
        std::fs::write(&path, br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.mime_type, "image/svg+xml");
        assert_eq!(file.byte_size, 41);
    }
}
