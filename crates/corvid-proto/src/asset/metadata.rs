//! The image asset wire submessage and its derivation rules.
//!
//! ## Field presence contract
//!
//! Optional fields on [`ImageAsset`] distinguish "absent" from "present but
//! empty", and peers depend on the distinction:
//!
//! | field    | with key bundle      | without key bundle        |
//! |----------|----------------------|---------------------------|
//! | otr_key  | the content key      | absent                    |
//! | mac_key  | the MAC key          | present, zero length      |
//! | mac      | the MAC tag          | present, zero length      |
//! | sha256   | absent               | absent                    |
//!
//! The asymmetry is deliberate: unencrypted assets still report empty
//! `mac`/`mac_key` blobs while `otr_key` is the one field left unset.
//! `sha256` belongs to a different encryption scheme and is never populated
//! by this layer.

use serde::{Deserialize, Serialize};

use super::inspect::InspectedImage;
use super::keys::ImageEncryptionKeys;
use super::properties::ImageProperties;

/// Rendition class of an image asset.
///
/// The lowercase tag strings are a versioned wire contract shared with peer
/// clients and must not change once shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Full-resolution source rendition.
    Original,
    /// Small inline preview.
    Preview,
    /// Downsized rendition shown in the conversation view.
    Medium,
    /// Profile picture rendition.
    Profile,
}

impl ImageFormat {
    /// Stable lowercase tag for this format.
    pub fn tag(&self) -> &'static str {
        match self {
            ImageFormat::Original => "original",
            ImageFormat::Preview => "preview",
            ImageFormat::Medium => "medium",
            ImageFormat::Profile => "profile",
        }
    }

    /// Parse a format from its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "original" => Some(ImageFormat::Original),
            "preview" => Some(ImageFormat::Preview),
            "medium" => Some(ImageFormat::Medium),
            "profile" => Some(ImageFormat::Profile),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Wire-level metadata for an image attachment.
///
/// Describes the rendition actually being sent (`width`/`height`/`size`/
/// `mime_type`), the source it was derived from (`original_width`/
/// `original_height`), and the encryption material when the asset was
/// encrypted. See the module docs for the field presence contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Rendition tag (see [`ImageFormat::tag`]).
    pub tag: String,
    /// Width of the sent rendition in pixels (0 when only raw bytes exist).
    pub width: u32,
    /// Height of the sent rendition in pixels (0 when only raw bytes exist).
    pub height: u32,
    /// Width of the source image in pixels.
    pub original_width: u32,
    /// Height of the source image in pixels.
    pub original_height: u32,
    /// MIME type of the sent rendition.
    pub mime_type: String,
    /// Byte length of the sent rendition (0 when only raw bytes exist).
    pub size: u32,
    /// Content key; only present for encrypted assets.
    pub otr_key: Option<Vec<u8>>,
    /// MAC key; present-but-empty for unencrypted assets.
    pub mac_key: Option<Vec<u8>>,
    /// MAC tag; present-but-empty for unencrypted assets.
    pub mac: Option<Vec<u8>>,
    /// Reserved for a different encryption scheme; never set by this layer.
    pub sha256: Option<Vec<u8>>,
}

impl ImageAsset {
    /// Derive the wire metadata for a processed rendition.
    ///
    /// `original` describes the source image, `processed` the rendition
    /// actually being sent. With a key bundle all three key fields carry
    /// the supplied material; without one the table in the module docs
    /// applies.
    pub fn from_properties(
        original: &ImageProperties,
        processed: &ImageProperties,
        keys: Option<&ImageEncryptionKeys>,
        format: ImageFormat,
    ) -> Self {
        Self {
            tag: format.tag().to_string(),
            width: processed.width,
            height: processed.height,
            original_width: original.width,
            original_height: original.height,
            mime_type: processed.mime_type.clone(),
            size: processed.byte_length,
            otr_key: keys.map(|k| k.otr_key().to_vec()),
            mac_key: Some(keys.map(|k| k.mac_key().to_vec()).unwrap_or_default()),
            mac: Some(keys.map(|k| k.mac().to_vec()).unwrap_or_default()),
            sha256: None,
        }
    }

    /// Derive the wire metadata for a raw, not-yet-processed image file.
    ///
    /// The inspected header supplies the original dimensions and MIME
    /// type; processed dimensions and size stay 0 because no processed
    /// rendition exists yet, and all encryption fields take their
    /// unencrypted defaults.
    pub fn from_inspected(image: &InspectedImage, format: ImageFormat) -> Self {
        Self {
            tag: format.tag().to_string(),
            width: 0,
            height: 0,
            original_width: image.width,
            original_height: image.height,
            mime_type: image.mime_type().to_string(),
            size: 0,
            otr_key: None,
            mac_key: Some(Vec::new()),
            mac: Some(Vec::new()),
            sha256: None,
        }
    }

    /// Whether this asset carries encryption material.
    pub fn is_encrypted(&self) -> bool {
        self.otr_key.is_some()
    }

    /// The rendition class, when the tag is a known format.
    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_tag(&self.tag)
    }
}
