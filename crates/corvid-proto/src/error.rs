//! Error types for envelope operations.

use thiserror::Error;

/// Errors that can occur while building, encoding, or decoding envelopes.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Builder finished without a message id set.
    #[error("envelope builder has no message id set")]
    MissingMessageId,

    /// Builder finished without a content variant set.
    #[error("envelope builder has no content variant set")]
    NoContent,

    /// Wire bytes did not parse as a valid envelope.
    ///
    /// Covers truncated input, garbage, and input rejected by the
    /// pre-deserialize size guard. A failed decode never yields a
    /// partially-populated envelope.
    #[error("malformed envelope: {0}")]
    Malformed(String),

    /// Envelope could not be encoded to its wire representation.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Raw image bytes could not be interpreted by the metadata reader.
    #[error("image inspection failed: {0}")]
    ImageInspection(String),
}

/// Result type for envelope operations.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
