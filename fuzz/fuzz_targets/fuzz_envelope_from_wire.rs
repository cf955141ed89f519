//! Fuzz target for MessageEnvelope::from_wire.
//!
//! Tests that decoding arbitrary bytes is handled safely.

#![no_main]

use corvid_proto::MessageEnvelope;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Attempt to decode bytes as an envelope
    // Should succeed for valid wire format, fail otherwise - never panic
    let result = MessageEnvelope::from_wire(data);

    // If successful, the envelope must re-encode and decode to an equal value
    if let Ok(envelope) = result {
        let bytes = envelope.to_wire().unwrap();
        let roundtrip = MessageEnvelope::from_wire(&bytes).unwrap();
        assert_eq!(envelope, roundtrip);

        // Exactly one variant is active
        let active = [
            envelope.has_text(),
            envelope.has_image(),
            envelope.has_knock(),
            envelope.has_last_read(),
            envelope.has_cleared(),
            envelope.has_client_action(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        assert_eq!(active, 1);
    }
});
