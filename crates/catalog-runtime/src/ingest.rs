//! Turning a selected file into an inline data URI.
//!
//! Reads are single-shot and not cancellable. Each selection gets a token;
//! a read result is only applied while its token is still the current
//! selection, so a slow read can never overwrite a newer choice.

use catalog_types::{DataUri, ImageFile, ImageSource};
use tracing::debug;

use crate::{Error, Result};

/// Identifies one file selection. Later selections have larger tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionToken(pub(crate) u64);

impl SelectionToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A read the caller must perform and hand back with `finish_image_read`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRead {
    pub token: SelectionToken,
    pub file: ImageFile,
}

impl PendingRead {
    /// Perform the read, keeping the token alongside the result.
    pub async fn run(self) -> (SelectionToken, Result<DataUri>) {
        let result = read_data_uri(&self.file).await;
        (self.token, result)
    }
}

/// Read a file's bytes and encode them under its declared media type.
pub async fn read_data_uri(file: &ImageFile) -> Result<DataUri> {
    let encoded = match &file.source {
        ImageSource::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(Error::ImageRead)?;
            DataUri::encode(&file.media_type, &bytes)
        }
        ImageSource::Bytes(bytes) => DataUri::encode(&file.media_type, bytes),
    };

    debug!(file = %file.name, bytes = file.size, "image encoded");
    Ok(encoded)
}
