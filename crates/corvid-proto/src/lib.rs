//! # corvid-proto
//!
//! Generic message envelope for the Corvid messenger.
//!
//! Every event exchanged between devices — text, image attachments,
//! attention knocks, read and cleared markers, session-control actions —
//! travels as a single [`MessageEnvelope`]: one message id plus exactly
//! one content variant, encoded to a compact binary wire format with
//! exact round-trip fidelity.
//!
//! This crate provides:
//! - **[`MessageEnvelope`]**: the immutable outer unit and its wire codec
//! - **[`EnvelopeBuilder`]**: a reusable mutable accumulator
//! - **[`Content`]**: the closed set of payload variants
//! - **[`ImageAsset`]**: nested metadata for (optionally encrypted) image
//!   attachments
//!
//! The crate carries encryption *metadata* only; encryption itself,
//! transport, and storage live in other layers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod asset;
pub mod envelope;
pub mod error;
pub mod limits;

#[cfg(test)]
mod proptests;

pub use asset::{
    ImageAsset, ImageEncryptionKeys, ImageFormat, ImageKind, ImageProperties, InspectedImage,
    inspect_image,
};
pub use envelope::{
    Cleared, ClientAction, Content, EnvelopeBuilder, Knock, LastRead, MessageEnvelope, MessageId,
    Text,
};
pub use error::{EnvelopeError, Result};
