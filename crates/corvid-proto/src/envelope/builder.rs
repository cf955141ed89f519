//! Mutable accumulator for assembling envelopes.

use crate::asset::ImageAsset;
use crate::envelope::content::{Cleared, ClientAction, Content, Knock, LastRead, Text};
use crate::envelope::generic::{MessageEnvelope, MessageId};
use crate::error::{EnvelopeError, Result};

/// Accumulates a message id and one content variant, then snapshots them
/// into an immutable [`MessageEnvelope`].
///
/// Setting any variant replaces whichever variant was set before, so a
/// built envelope always carries exactly one. The builder stays usable
/// after [`build`](Self::build): [`clear`](Self::clear) it and
/// [`merge_wire`](Self::merge_wire) fresh bytes to decode messages in a
/// loop without allocating a new builder per message.
///
/// Builders are single-threaded accumulators. Share the built envelopes
/// instead; those are immutable.
///
/// # Example
///
/// ```
/// use corvid_proto::{EnvelopeBuilder, MessageId, Text};
///
/// let mut builder = EnvelopeBuilder::new();
/// builder
///     .set_message_id(MessageId::generate())
///     .set_text(Text::new("hello"));
/// let envelope = builder.build().unwrap();
/// assert!(envelope.has_text());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvelopeBuilder {
    message_id: Option<MessageId>,
    content: Option<Content>,
}

impl EnvelopeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message id, replacing any previous id.
    pub fn set_message_id(&mut self, id: impl Into<MessageId>) -> &mut Self {
        self.message_id = Some(id.into());
        self
    }

    /// Set the active content variant directly.
    pub fn set_content(&mut self, content: Content) -> &mut Self {
        self.content = Some(content);
        self
    }

    /// Set a text variant, replacing any active variant.
    pub fn set_text(&mut self, text: Text) -> &mut Self {
        self.set_content(Content::Text(text))
    }

    /// Set an image variant, replacing any active variant.
    pub fn set_image(&mut self, image: ImageAsset) -> &mut Self {
        self.set_content(Content::Image(image))
    }

    /// Set a knock variant, replacing any active variant.
    pub fn set_knock(&mut self, knock: Knock) -> &mut Self {
        self.set_content(Content::Knock(knock))
    }

    /// Set a read-horizon variant, replacing any active variant.
    pub fn set_last_read(&mut self, last_read: LastRead) -> &mut Self {
        self.set_content(Content::LastRead(last_read))
    }

    /// Set a history-cleared variant, replacing any active variant.
    pub fn set_cleared(&mut self, cleared: Cleared) -> &mut Self {
        self.set_content(Content::Cleared(cleared))
    }

    /// Set a session-control variant, replacing any active variant.
    pub fn set_client_action(&mut self, action: ClientAction) -> &mut Self {
        self.set_content(Content::ClientAction(action))
    }

    /// Reset the builder to its empty state for reuse.
    pub fn clear(&mut self) -> &mut Self {
        self.message_id = None;
        self.content = None;
        self
    }

    /// Decode an envelope from wire bytes and adopt its id and content.
    ///
    /// Both fields are replaced on success, so nothing from a previous
    /// build survives a `clear()` + `merge_wire()` cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Malformed`] for unparseable bytes; the
    /// builder is left untouched in that case.
    pub fn merge_wire(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let (message_id, content) = MessageEnvelope::from_wire(bytes)?.into_parts();
        self.message_id = Some(message_id);
        self.content = Some(content);
        Ok(self)
    }

    /// Snapshot the accumulated state into an immutable envelope.
    ///
    /// The builder keeps its state and can build again, or be cleared and
    /// reused.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::MissingMessageId`] if no id was set, or
    /// [`EnvelopeError::NoContent`] if no variant was set. There is no
    /// "empty" variant; an envelope without content cannot be built.
    pub fn build(&self) -> Result<MessageEnvelope> {
        let message_id = self
            .message_id
            .clone()
            .ok_or(EnvelopeError::MissingMessageId)?;
        let content = self.content.clone().ok_or(EnvelopeError::NoContent)?;
        Ok(MessageEnvelope::new(message_id, content))
    }
}
