//! The generic message envelope and its wire codec.
//!
//! A [`MessageEnvelope`] is the unit every device-to-device event travels
//! in: one message id plus exactly one [`Content`] variant. Envelopes are
//! immutable once built; mutation happens in the
//! [`EnvelopeBuilder`](super::builder::EnvelopeBuilder) before the
//! snapshot, never after.
//!
//! ## Wire format
//!
//! The envelope encodes through the tagged binary primitive (serde +
//! bincode): one variant discriminant, then the active variant's fields.
//! Unset optional fields are omitted rather than zero-filled, which keeps
//! "absent" and "present but empty" distinct for peers.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asset::{ImageAsset, ImageEncryptionKeys, ImageFormat, ImageProperties, inspect_image};
use crate::envelope::content::{Cleared, ClientAction, Content, Knock, LastRead, Text};
use crate::error::{EnvelopeError, Result};
use crate::limits::MAX_ENVELOPE_SIZE;

/// Unique identifier of a message instance.
///
/// Opaque to the protocol: caller-supplied ids pass through verbatim,
/// while [`MessageId::generate`] produces a lowercase hyphenated UUID v4.
/// Once set on an envelope the id never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single message exchanged between devices.
///
/// The envelope exclusively owns its content; sharing happens by cloning
/// or by reference, never by aliasing payloads across envelopes. Built
/// envelopes are immutable and safe to read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    message_id: MessageId,
    content: Content,
}

impl MessageEnvelope {
    /// Create an envelope from its parts.
    pub fn new(message_id: impl Into<MessageId>, content: Content) -> Self {
        Self {
            message_id: message_id.into(),
            content,
        }
    }

    /// Get the message id.
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    /// Get the active content variant.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Split the envelope into its parts.
    pub(crate) fn into_parts(self) -> (MessageId, Content) {
        (self.message_id, self.content)
    }

    /// Check if the envelope carries a text message.
    pub fn has_text(&self) -> bool {
        self.content.is_text()
    }

    /// Check if the envelope carries image metadata.
    pub fn has_image(&self) -> bool {
        self.content.is_image()
    }

    /// Check if the envelope carries a knock.
    pub fn has_knock(&self) -> bool {
        self.content.is_knock()
    }

    /// Check if the envelope carries a read-horizon marker.
    pub fn has_last_read(&self) -> bool {
        self.content.is_last_read()
    }

    /// Check if the envelope carries a history-cleared marker.
    pub fn has_cleared(&self) -> bool {
        self.content.is_cleared()
    }

    /// Check if the envelope carries a session-control signal.
    pub fn has_client_action(&self) -> bool {
        self.content.is_client_action()
    }

    /// The text body, if this is a text message.
    pub fn text(&self) -> Option<&Text> {
        self.content.as_text()
    }

    /// The image metadata, if this is an image attachment.
    pub fn image(&self) -> Option<&ImageAsset> {
        self.content.as_image()
    }

    /// The knock, if this is a knock.
    pub fn knock(&self) -> Option<&Knock> {
        self.content.as_knock()
    }

    /// The marker, if this is a read-horizon marker.
    pub fn last_read(&self) -> Option<&LastRead> {
        self.content.as_last_read()
    }

    /// The marker, if this is a history-cleared marker.
    pub fn cleared(&self) -> Option<&Cleared> {
        self.content.as_cleared()
    }

    /// The action, if this is a session-control signal.
    pub fn client_action(&self) -> Option<ClientAction> {
        self.content.as_client_action()
    }

    /// Build a text message envelope.
    pub fn for_text(content: impl Into<String>, nonce: impl Into<MessageId>) -> Self {
        Self::new(nonce, Content::Text(Text::new(content)))
    }

    /// Build an image envelope from a source and a processed rendition.
    ///
    /// `original` describes the source image, `processed` the rendition
    /// being sent. When `keys` is `None` the asset carries the unencrypted
    /// field defaults (`otr_key` absent, `mac`/`mac_key` present but
    /// empty).
    pub fn for_image(
        original: &ImageProperties,
        processed: &ImageProperties,
        keys: Option<&ImageEncryptionKeys>,
        nonce: impl Into<MessageId>,
        format: ImageFormat,
    ) -> Self {
        let asset = ImageAsset::from_properties(original, processed, keys, format);
        Self::new(nonce, Content::Image(asset))
    }

    /// Build an image envelope from raw file bytes.
    ///
    /// Inspects the bytes to learn the source dimensions and MIME type.
    /// Processed width/height/size stay 0 because no processed rendition
    /// exists yet, and all encryption fields are empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::ImageInspection`] when the bytes cannot be
    /// interpreted as an image; a bad file never produces a zeroed-out
    /// asset.
    pub fn for_image_data(
        bytes: &[u8],
        format: ImageFormat,
        nonce: impl Into<MessageId>,
    ) -> Result<Self> {
        let inspected = inspect_image(bytes)?;
        let asset = ImageAsset::from_inspected(&inspected, format);
        Ok(Self::new(nonce, Content::Image(asset)))
    }

    /// Build a knock envelope (`hot_knock` defaults to false).
    pub fn for_knock(nonce: impl Into<MessageId>) -> Self {
        Self::new(nonce, Content::Knock(Knock::default()))
    }

    /// Build a read-horizon marker envelope.
    pub fn for_last_read(
        conversation_id: impl Into<String>,
        timestamp: SystemTime,
        nonce: impl Into<MessageId>,
    ) -> Self {
        Self::new(nonce, Content::LastRead(LastRead::new(conversation_id, timestamp)))
    }

    /// Build a history-cleared marker envelope.
    pub fn for_cleared(
        conversation_id: impl Into<String>,
        timestamp: SystemTime,
        nonce: impl Into<MessageId>,
    ) -> Self {
        Self::new(nonce, Content::Cleared(Cleared::new(conversation_id, timestamp)))
    }

    /// Build a session-reset envelope.
    pub fn for_session_reset(nonce: impl Into<MessageId>) -> Self {
        Self::new(nonce, Content::ClientAction(ClientAction::ResetSession))
    }

    /// Encode the envelope to its wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Serialization`] if the wire primitive
    /// fails.
    pub fn to_wire(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Decode an envelope from wire bytes.
    ///
    /// The input length is checked against [`MAX_ENVELOPE_SIZE`] before
    /// deserialization so a malicious length field cannot trigger an
    /// oversized allocation.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Malformed`] for truncated, oversized, or
    /// otherwise unparseable input. A failed decode yields no envelope at
    /// all, never a partially-populated one.
    pub fn from_wire(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_ENVELOPE_SIZE {
            return Err(EnvelopeError::Malformed(format!(
                "envelope too large: {} bytes exceeds maximum {} bytes",
                bytes.len(),
                MAX_ENVELOPE_SIZE
            )));
        }

        bincode::deserialize(bytes).map_err(|e| EnvelopeError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_message_id_verbatim() {
        let id = MessageId::new("Nonce-With-Case");
        assert_eq!(id.as_str(), "Nonce-With-Case");
        assert_eq!(id.to_string(), "Nonce-With-Case");
    }

    #[test]
    fn test_generated_id_is_lowercase() {
        let id = MessageId::generate();
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn test_generated_ids_unique() {
        assert_ne!(MessageId::generate(), MessageId::generate());
    }

    #[test]
    fn test_exactly_one_predicate_true() {
        let envelope = MessageEnvelope::for_knock("nonce");
        let predicates = [
            envelope.has_text(),
            envelope.has_image(),
            envelope.has_knock(),
            envelope.has_last_read(),
            envelope.has_cleared(),
            envelope.has_client_action(),
        ];
        assert_eq!(predicates.iter().filter(|p| **p).count(), 1);
        assert!(envelope.has_knock());
    }

    #[test]
    fn test_for_knock() {
        let nonce = MessageId::generate();
        let envelope = MessageEnvelope::for_knock(nonce.clone());

        assert!(envelope.has_knock());
        assert!(!envelope.knock().unwrap().hot_knock);
        assert_eq!(envelope.message_id(), &nonce);
    }

    #[test]
    fn test_for_last_read() {
        let timestamp = UNIX_EPOCH + Duration::from_secs(5000);
        let envelope = MessageEnvelope::for_last_read("someID", timestamp, "nonce");

        assert!(envelope.has_last_read());
        assert_eq!(envelope.message_id().as_str(), "nonce");

        let marker = envelope.last_read().unwrap();
        assert_eq!(marker.conversation_id, "someID");
        assert_eq!(marker.last_read_timestamp, 5_000_000);

        let restored = UNIX_EPOCH + Duration::from_secs((marker.last_read_timestamp / 1000) as u64);
        assert_eq!(restored, timestamp);
    }

    #[test]
    fn test_for_cleared() {
        let timestamp = UNIX_EPOCH + Duration::from_secs(5000);
        let envelope = MessageEnvelope::for_cleared("someID", timestamp, "nonce");

        assert!(envelope.has_cleared());
        assert_eq!(envelope.message_id().as_str(), "nonce");

        let marker = envelope.cleared().unwrap();
        assert_eq!(marker.conversation_id, "someID");
        assert_eq!(marker.cleared_timestamp, 5_000_000);
    }

    #[test]
    fn test_for_session_reset() {
        let nonce = MessageId::generate();
        let envelope = MessageEnvelope::for_session_reset(nonce.clone());

        assert!(envelope.has_client_action());
        assert_eq!(envelope.client_action(), Some(ClientAction::ResetSession));
        assert_eq!(envelope.message_id(), &nonce);
    }

    #[test]
    fn test_wire_roundtrip_text() {
        let envelope = MessageEnvelope::for_text("Lorem ipsum dolor sit amet", "nonce");
        let bytes = envelope.to_wire().unwrap();
        let restored = MessageEnvelope::from_wire(&bytes).unwrap();
        assert_eq!(envelope, restored);
    }

    #[test]
    fn test_wire_roundtrip_image_without_keys() {
        let original = ImageProperties::new(10_000, 20_000, 200_000, "image/png");
        let processed = ImageProperties::new(640, 480, 200, "image/jpeg");
        let envelope =
            MessageEnvelope::for_image(&original, &processed, None, "nonce", ImageFormat::Preview);

        let restored = MessageEnvelope::from_wire(&envelope.to_wire().unwrap()).unwrap();
        assert_eq!(envelope, restored);

        let image = restored.image().unwrap();
        assert!(image.otr_key.is_none());
        assert_eq!(image.mac.as_deref(), Some(&[][..]));
        assert_eq!(image.mac_key.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_wire_roundtrip_image_with_keys() {
        let original = ImageProperties::new(10_000, 20_000, 200_000, "image/png");
        let processed = ImageProperties::new(640, 480, 200, "image/jpeg");
        let keys =
            ImageEncryptionKeys::new(b"OTR KEY".to_vec(), b"MAC KEY".to_vec(), b"MAC".to_vec());
        let envelope = MessageEnvelope::for_image(
            &original,
            &processed,
            Some(&keys),
            "nonce",
            ImageFormat::Medium,
        );

        let restored = MessageEnvelope::from_wire(&envelope.to_wire().unwrap()).unwrap();
        assert_eq!(envelope, restored);

        let image = restored.image().unwrap();
        assert_eq!(image.otr_key.as_deref(), Some(&b"OTR KEY"[..]));
        assert_eq!(image.mac_key.as_deref(), Some(&b"MAC KEY"[..]));
        assert_eq!(image.mac.as_deref(), Some(&b"MAC"[..]));
        assert!(image.sha256.is_none());
    }

    #[test]
    fn test_from_wire_garbage_fails() {
        let result = MessageEnvelope::from_wire(&[0xFF; 64]);
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));
    }

    #[test]
    fn test_from_wire_truncated_fails() {
        let envelope = MessageEnvelope::for_text("a moderately sized payload", "nonce");
        let bytes = envelope.to_wire().unwrap();

        let result = MessageEnvelope::from_wire(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));
    }

    #[test]
    fn test_from_wire_oversized_fails() {
        let oversized = vec![0u8; MAX_ENVELOPE_SIZE + 1];
        let result = MessageEnvelope::from_wire(&oversized);
        assert!(matches!(
            result,
            Err(EnvelopeError::Malformed(msg)) if msg.contains("too large")
        ));
    }

    #[test]
    fn test_empty_strings_roundtrip() {
        let envelope = MessageEnvelope::for_text("", "");
        let restored = MessageEnvelope::from_wire(&envelope.to_wire().unwrap()).unwrap();
        assert_eq!(envelope, restored);
        assert_eq!(restored.text().unwrap().content, "");
        assert_eq!(restored.message_id().as_str(), "");
    }
}
