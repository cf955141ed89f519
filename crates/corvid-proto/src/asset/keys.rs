//! Encryption key bundle for encrypted image assets.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key material attached to an encrypted image asset.
///
/// Carries the content (OTR) key, the MAC key, and the MAC tag produced by
/// the encryption layer. The bundle is all-or-nothing: an asset is built
/// either with a complete bundle or with none at all, never a partial one.
///
/// This crate only transports the material; encryption and verification
/// happen elsewhere. Key material is zeroized when the bundle is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ImageEncryptionKeys {
    otr_key: Vec<u8>,
    mac_key: Vec<u8>,
    mac: Vec<u8>,
}

impl ImageEncryptionKeys {
    /// Create a bundle from the three blobs produced by the encryption
    /// layer.
    pub fn new(otr_key: Vec<u8>, mac_key: Vec<u8>, mac: Vec<u8>) -> Self {
        Self {
            otr_key,
            mac_key,
            mac,
        }
    }

    /// The symmetric content key.
    pub fn otr_key(&self) -> &[u8] {
        &self.otr_key
    }

    /// The MAC key.
    pub fn mac_key(&self) -> &[u8] {
        &self.mac_key
    }

    /// The MAC tag over the encrypted content.
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }
}

impl std::fmt::Debug for ImageEncryptionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs.
        f.debug_struct("ImageEncryptionKeys")
            .field("otr_key", &format_args!("[{} bytes]", self.otr_key.len()))
            .field("mac_key", &format_args!("[{} bytes]", self.mac_key.len()))
            .field("mac", &format_args!("[{} bytes]", self.mac.len()))
            .finish()
    }
}
