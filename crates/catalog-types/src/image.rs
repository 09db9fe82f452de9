use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

const OCTET_STREAM: &str = "application/octet-stream";

/// Self-contained image payload: `data:<media type>;base64,<bytes>`.
///
/// Stored as plain text so a product record stays persistable as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw bytes under the given media type.
    pub fn encode(media_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type declared in the header, if the header is well-formed
    pub fn media_type(&self) -> Option<&str> {
        split_header(&self.0).map(|(media_type, _)| media_type)
    }

    /// Decode the payload back into bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let (_, payload) = split_header(&self.0)
            .ok_or_else(|| Error::InvalidDataUri(truncate_for_error(&self.0)))?;
        STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidDataUri(e.to_string()))
    }

    /// Size of the decoded payload, computed from the base64 length.
    pub fn payload_len(&self) -> usize {
        let Some((_, payload)) = split_header(&self.0) else {
            return 0;
        };
        let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
        ((payload.len() / 4) * 3).saturating_sub(padding.min(2))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DataUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn split_header(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let media_type = header.strip_suffix(";base64")?;
    Some((media_type, payload))
}

fn truncate_for_error(text: &str) -> String {
    text.chars().take(32).collect()
}

/// Where the bytes of a selected file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file picked for upload, with the metadata the validator inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    /// Declared media type (e.g. `image/png`)
    pub media_type: String,
    pub size: u64,
    pub source: ImageSource,
}

impl ImageFile {
    /// Describe a file on disk. The media type comes from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            media_type: media_type_for_path(path).to_string(),
            size: metadata.len(),
            source: ImageSource::Path(path.to_path_buf()),
        })
    }

    /// Describe an in-memory file.
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: bytes.len() as u64,
            source: ImageSource::Bytes(bytes),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Media type for a file name, by extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_encode_builds_data_uri() {
        let uri = DataUri::encode("image/png", b"abc");
        assert_eq!(uri.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(uri.media_type(), Some("image/png"));
        assert_eq!(uri.decode().unwrap(), b"abc");
    }

    #[test]
    fn test_payload_len_accounts_for_padding() {
        assert_eq!(DataUri::encode("image/gif", b"a").payload_len(), 1);
        assert_eq!(DataUri::encode("image/gif", b"ab").payload_len(), 2);
        assert_eq!(DataUri::encode("image/gif", b"abcd").payload_len(), 4);
        assert_eq!(DataUri::encode("image/gif", b"").payload_len(), 0);
    }

    #[test]
    fn test_malformed_header_does_not_decode() {
        let stored: DataUri = serde_json::from_str(r#""https://example.com/a.png""#).unwrap();
        assert!(stored.media_type().is_none());
        assert!(stored.decode().is_err());
        assert_eq!(stored.payload_len(), 0);
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(media_type_for_path(Path::new("a.PNG")), "image/png");
        assert_eq!(media_type_for_path(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("notes.txt")), OCTET_STREAM);
        assert_eq!(media_type_for_path(Path::new("noext")), OCTET_STREAM);
    }

    #[test]
    fn test_from_path_reads_metadata() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("mug.png");
        std::fs::write(&path, [0u8; 16])?;

        let file = ImageFile::from_path(&path)?;
        assert_eq!(file.name, "mug.png");
        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.size, 16);
        assert!(file.is_image());
        Ok(())
    }

    #[test]
    fn test_text_file_is_not_an_image() {
        let file = ImageFile::from_bytes("notes.txt", "text/plain", b"hello".to_vec());
        assert!(!file.is_image());
        assert_eq!(file.size, 5);
    }
}
