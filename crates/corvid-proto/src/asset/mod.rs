//! Image asset model.
//!
//! An image travels as metadata inside the envelope while the bytes
//! themselves move out of band. This module provides the pieces that
//! metadata is derived from:
//!
//! - [`ImageProperties`]: pixel dimensions, byte length, and MIME type of
//!   one rendition
//! - [`ImageEncryptionKeys`]: the all-or-nothing key bundle attached to
//!   encrypted assets
//! - [`ImageAsset`]: the wire submessage combining a processed and an
//!   original rendition with the optional key material
//! - [`inspect_image`]: header-only type/dimension sniffing for raw files

pub mod inspect;
pub mod keys;
pub mod metadata;
pub mod properties;

pub use inspect::{ImageKind, InspectedImage, inspect_image};
pub use keys::ImageEncryptionKeys;
pub use metadata::{ImageAsset, ImageFormat};
pub use properties::ImageProperties;
