//! Content variants carried by a message envelope.
//!
//! Every payload kind a device can exchange is one arm of [`Content`].
//! The sum type makes "two variants set at once" unrepresentable; the
//! builder enforces replacement rather than accumulation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::asset::ImageAsset;
use crate::error::{EnvelopeError, Result};

/// A plain text message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The message text.
    pub content: String,
}

impl Text {
    /// Create a text body.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// An attention ping ("knock").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knock {
    /// Whether this is an emphasized ("hot") knock. Defaults to false.
    pub hot_knock: bool,
}

impl Knock {
    /// Create a knock.
    pub fn new(hot_knock: bool) -> Self {
        Self { hot_knock }
    }
}

/// Moves a conversation's read horizon forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRead {
    /// The conversation whose horizon moved.
    pub conversation_id: String,
    /// Read horizon in milliseconds since the Unix epoch.
    pub last_read_timestamp: i64,
}

impl LastRead {
    /// Create a read-horizon marker for a point in time.
    ///
    /// The timestamp is stored at millisecond granularity, so any input
    /// that is representable in whole milliseconds survives a round trip
    /// through the wire exactly.
    pub fn new(conversation_id: impl Into<String>, timestamp: SystemTime) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            last_read_timestamp: unix_millis(timestamp),
        }
    }
}

/// Marks a conversation's history as cleared up to a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleared {
    /// The conversation that was cleared.
    pub conversation_id: String,
    /// Clearing point in milliseconds since the Unix epoch.
    pub cleared_timestamp: i64,
}

impl Cleared {
    /// Create a history-cleared marker for a point in time.
    pub fn new(conversation_id: impl Into<String>, timestamp: SystemTime) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            cleared_timestamp: unix_millis(timestamp),
        }
    }
}

/// Session-control signals exchanged between clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ClientAction {
    /// Ask the peer device to reset the cryptographic session.
    ResetSession = 0,
}

impl ClientAction {
    /// Get the numeric value of the action.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Create an action from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a known action.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::ResetSession),
            _ => Err(EnvelopeError::Malformed(format!(
                "unknown client action: {}",
                value
            ))),
        }
    }
}

impl std::fmt::Display for ClientAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResetSession => write!(f, "ResetSession"),
        }
    }
}

/// The closed set of payload kinds an envelope may carry.
///
/// Exactly one variant is active per envelope. The enum tag doubles as the
/// wire discriminant, and unset sibling variants are simply not encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    /// A text message.
    Text(Text),
    /// Metadata for an image attachment.
    Image(ImageAsset),
    /// An attention ping.
    Knock(Knock),
    /// A read-horizon marker.
    LastRead(LastRead),
    /// A history-cleared marker.
    Cleared(Cleared),
    /// A session-control signal.
    ClientAction(ClientAction),
}

impl Content {
    /// Check if this is a text message.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is an image attachment.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// Check if this is a knock.
    pub fn is_knock(&self) -> bool {
        matches!(self, Self::Knock(_))
    }

    /// Check if this is a read-horizon marker.
    pub fn is_last_read(&self) -> bool {
        matches!(self, Self::LastRead(_))
    }

    /// Check if this is a history-cleared marker.
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared(_))
    }

    /// Check if this is a session-control signal.
    pub fn is_client_action(&self) -> bool {
        matches!(self, Self::ClientAction(_))
    }

    /// Get the text body if this is a text message.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the image metadata if this is an image attachment.
    pub fn as_image(&self) -> Option<&ImageAsset> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Get the knock if this is a knock.
    pub fn as_knock(&self) -> Option<&Knock> {
        match self {
            Self::Knock(knock) => Some(knock),
            _ => None,
        }
    }

    /// Get the marker if this is a read-horizon marker.
    pub fn as_last_read(&self) -> Option<&LastRead> {
        match self {
            Self::LastRead(last_read) => Some(last_read),
            _ => None,
        }
    }

    /// Get the marker if this is a history-cleared marker.
    pub fn as_cleared(&self) -> Option<&Cleared> {
        match self {
            Self::Cleared(cleared) => Some(cleared),
            _ => None,
        }
    }

    /// Get the action if this is a session-control signal.
    pub fn as_client_action(&self) -> Option<ClientAction> {
        match self {
            Self::ClientAction(action) => Some(*action),
            _ => None,
        }
    }
}

/// Convert a point in time to signed milliseconds since the Unix epoch.
///
/// Times before the epoch come out negative, so the full `SystemTime`
/// range is representable on the wire.
pub(crate) fn unix_millis(timestamp: SystemTime) -> i64 {
    match timestamp.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(before_epoch) => -(before_epoch.duration().as_millis() as i64),
    }
}
