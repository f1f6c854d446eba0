//! Image preview decoding
//!
//! A selected file is read asynchronously and encoded as a `data:` URL.
//! Completions are applied to a [`PreviewSlot`] in the order they arrive;
//! there is no sequence guard, so the last read to finish wins.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{CoreResult, ValidationError};
use crate::traits::FileReader;

/// Media type prefix that marks a previewable file
const IMAGE_MARKER: &str = "image/";

/// A file chosen by the user together with its declared media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub media_type: String,
}

impl SelectedFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            media_type: media_type.into(),
        }
    }

    /// Declare the media type from the file extension
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = media_type_for(&path).to_string();
        Self { path, media_type }
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with(IMAGE_MARKER)
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Reject files whose media type is not an image
pub fn accept_image(file: &SelectedFile) -> Result<(), ValidationError> {
    if file.is_image() {
        Ok(())
    } else {
        Err(ValidationError::NotAnImage {
            media_type: file.media_type.clone(),
        })
    }
}

/// Encode bytes as a base64 `data:` URL
#[must_use]
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Read a selected image and return its `data:` URL.
///
/// Non-image files are rejected before any read happens.
pub async fn read_as_data_url(reader: &dyn FileReader, file: &SelectedFile) -> CoreResult<String> {
    accept_image(file)?;
    let bytes = reader.read(&file.path).await?;
    log::debug!(
        "Read {} bytes for preview from {}",
        bytes.len(),
        file.path.display()
    );
    Ok(encode_data_url(&file.media_type, &bytes))
}

/// Preview element state: current image source and visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSlot {
    source: Option<String>,
    visible: bool,
}

impl PreviewSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a finished read; overwrites whatever was shown before
    pub fn complete(&mut self, data_url: String) {
        self.source = Some(data_url);
        self.visible = true;
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.source = None;
        self.visible = false;
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
