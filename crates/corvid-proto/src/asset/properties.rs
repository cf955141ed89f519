//! Pixel-level properties of a single image rendition.

use serde::{Deserialize, Serialize};

/// Dimensions, byte length, and MIME type of one image rendition.
///
/// A plain value type: the same shape describes the original source image
/// and any processed (downsized) rendition derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProperties {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded file size in bytes.
    pub byte_length: u32,
    /// MIME type of the encoded file.
    pub mime_type: String,
}

impl ImageProperties {
    /// Create properties for a rendition.
    pub fn new(width: u32, height: u32, byte_length: u32, mime_type: impl Into<String>) -> Self {
        Self {
            width,
            height,
            byte_length,
            mime_type: mime_type.into(),
        }
    }
}
