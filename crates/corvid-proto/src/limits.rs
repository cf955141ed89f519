//! Protocol limits and constants.
//!
//! All limits are defined here for consistent enforcement.

/// Maximum serialized envelope size accepted by the decoder.
///
/// Checked before deserialization so a malicious length field cannot
/// trigger an oversized allocation. Envelopes carry metadata only (image
/// bytes travel out of band), so this bound is generous.
pub const MAX_ENVELOPE_SIZE: usize = 256 * 1024;

/// Maximum raw image blob size accepted by the inspector (10 MB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
