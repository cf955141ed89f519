//! The generic message envelope.
//!
//! ```text
//! +---------------------+
//! | MessageEnvelope     |
//! +---------------------+
//! | - message_id        |  Caller-supplied nonce, immutable
//! | - content           |  Exactly one Content variant:
//! |     Text            |    plain message body
//! |     Image           |    image asset metadata
//! |     Knock           |    attention ping
//! |     LastRead        |    read-horizon marker
//! |     Cleared         |    history-cleared marker
//! |     ClientAction    |    session-control signal
//! +---------------------+
//! ```
//!
//! Envelopes are assembled through the [`EnvelopeBuilder`] or the
//! `MessageEnvelope::for_*` convenience constructors, and cross the wire
//! through `to_wire`/`from_wire` on the envelope itself.
//!
//! ## Modules
//!
//! - [`content`]: the closed variant set and its payload types
//! - [`generic`]: the envelope, convenience constructors, and wire codec
//! - [`builder`]: the mutable accumulator

pub mod builder;
pub mod content;
pub mod generic;

pub use builder::EnvelopeBuilder;
pub use content::{Cleared, ClientAction, Content, Knock, LastRead, Text};
pub use generic::{MessageEnvelope, MessageId};
