//! Header-only inspection of raw image files.
//!
//! Reads the type and pixel dimensions out of an image file's header
//! without decoding the pixel data. Used by the raw-image envelope
//! constructor, where the client has file bytes but no processed rendition
//! yet.

use crate::error::{EnvelopeError, Result};
use crate::limits::MAX_IMAGE_BYTES;

/// Image file types the inspector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// JPEG image.
    Jpeg,
    /// PNG image.
    Png,
    /// WebP image.
    WebP,
    /// GIF image.
    Gif,
}

impl ImageKind {
    /// Get the MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::WebP => "image/webp",
            ImageKind::Gif => "image/gif",
        }
    }

    fn from_detected(detected: imagesize::ImageType) -> Option<Self> {
        match detected {
            imagesize::ImageType::Jpeg => Some(ImageKind::Jpeg),
            imagesize::ImageType::Png => Some(ImageKind::Png),
            imagesize::ImageType::Webp => Some(ImageKind::WebP),
            imagesize::ImageType::Gif => Some(ImageKind::Gif),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Type and pixel dimensions read from an image file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Detected file type.
    pub kind: ImageKind,
}

impl InspectedImage {
    /// MIME type of the detected file type.
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

/// Read type and pixel dimensions from the header of a raw image file.
///
/// # Errors
///
/// Returns [`EnvelopeError::ImageInspection`] when the blob is empty,
/// exceeds [`MAX_IMAGE_BYTES`], is not a recognized image type, or has a
/// header the reader cannot parse. Callers never receive zeroed-out
/// dimensions for bad input.
pub fn inspect_image(bytes: &[u8]) -> Result<InspectedImage> {
    if bytes.is_empty() {
        return Err(EnvelopeError::ImageInspection(
            "empty image data".to_string(),
        ));
    }

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(EnvelopeError::ImageInspection(format!(
            "image too large: {} bytes exceeds maximum {} bytes",
            bytes.len(),
            MAX_IMAGE_BYTES
        )));
    }

    let kind = imagesize::image_type(bytes)
        .ok()
        .and_then(ImageKind::from_detected)
        .ok_or_else(|| EnvelopeError::ImageInspection("unrecognized image type".to_string()))?;

    let size = imagesize::blob_size(bytes)
        .map_err(|e| EnvelopeError::ImageInspection(e.to_string()))?;

    Ok(InspectedImage {
        width: size.width as u32,
        height: size.height as u32,
        kind,
    })
}
