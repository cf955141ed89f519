//! Property-based tests for the envelope core.
//!
//! These tests verify the crate's invariants hold for arbitrary inputs:
//!
//! - Wire round-trips are field-for-field exact for every variant
//! - The builder's last variant always wins
//! - Millisecond timestamps reconstruct second-granularity inputs exactly
//! - Unencrypted assets keep the absent/present-but-empty asymmetry

use proptest::prelude::*;
use std::time::{Duration, UNIX_EPOCH};

use crate::asset::{ImageAsset, ImageEncryptionKeys, ImageFormat, ImageProperties};
use crate::envelope::{
    Cleared, ClientAction, Content, EnvelopeBuilder, Knock, LastRead, MessageEnvelope, Text,
};

fn arb_format() -> impl Strategy<Value = ImageFormat> {
    prop_oneof![
        Just(ImageFormat::Original),
        Just(ImageFormat::Preview),
        Just(ImageFormat::Medium),
        Just(ImageFormat::Profile),
    ]
}

fn arb_properties() -> impl Strategy<Value = ImageProperties> {
    (any::<u32>(), any::<u32>(), any::<u32>(), ".{0,32}")
        .prop_map(|(w, h, len, mime)| ImageProperties::new(w, h, len, mime))
}

fn arb_keys() -> impl Strategy<Value = Option<ImageEncryptionKeys>> {
    proptest::option::of(
        (
            proptest::collection::vec(any::<u8>(), 0..64),
            proptest::collection::vec(any::<u8>(), 0..64),
            proptest::collection::vec(any::<u8>(), 0..64),
        )
            .prop_map(|(otr, mac_key, mac)| ImageEncryptionKeys::new(otr, mac_key, mac)),
    )
}

fn arb_content() -> impl Strategy<Value = Content> {
    prop_oneof![
        ".{0,400}".prop_map(|s| Content::Text(Text::new(s))),
        (arb_properties(), arb_properties(), arb_keys(), arb_format()).prop_map(
            |(original, processed, keys, format)| {
                Content::Image(ImageAsset::from_properties(
                    &original,
                    &processed,
                    keys.as_ref(),
                    format,
                ))
            }
        ),
        any::<bool>().prop_map(|hot| Content::Knock(Knock::new(hot))),
        (".{0,64}", any::<i64>()).prop_map(|(conversation_id, last_read_timestamp)| {
            Content::LastRead(LastRead {
                conversation_id,
                last_read_timestamp,
            })
        }),
        (".{0,64}", any::<i64>()).prop_map(|(conversation_id, cleared_timestamp)| {
            Content::Cleared(Cleared {
                conversation_id,
                cleared_timestamp,
            })
        }),
        Just(Content::ClientAction(ClientAction::ResetSession)),
    ]
}

proptest! {
    #[test]
    fn wire_roundtrip_exact(content in arb_content(), id in ".{0,64}") {
        let envelope = MessageEnvelope::new(id.as_str(), content);

        let bytes = envelope.to_wire().unwrap();
        let restored = MessageEnvelope::from_wire(&bytes).unwrap();

        prop_assert_eq!(envelope, restored);
    }

    #[test]
    fn last_variant_set_wins(first in arb_content(), second in arb_content()) {
        let mut builder = EnvelopeBuilder::new();
        builder
            .set_message_id("nonce")
            .set_content(first)
            .set_content(second.clone());

        let envelope = builder.build().unwrap();
        prop_assert_eq!(envelope.content(), &second);
    }

    #[test]
    fn millis_reversible_at_second_granularity(secs in 0u64..=4_102_444_800) {
        let timestamp = UNIX_EPOCH + Duration::from_secs(secs);
        let marker = LastRead::new("conv", timestamp);

        prop_assert_eq!(marker.last_read_timestamp, (secs as i64) * 1000);

        let restored = UNIX_EPOCH + Duration::from_secs((marker.last_read_timestamp / 1000) as u64);
        prop_assert_eq!(restored, timestamp);
    }

    #[test]
    fn unencrypted_assets_keep_field_asymmetry(
        original in arb_properties(),
        processed in arb_properties(),
        format in arb_format(),
    ) {
        let asset = ImageAsset::from_properties(&original, &processed, None, format);

        prop_assert!(asset.otr_key.is_none());
        prop_assert_eq!(asset.mac.as_deref(), Some(&[][..]));
        prop_assert_eq!(asset.mac_key.as_deref(), Some(&[][..]));
        prop_assert!(asset.sha256.is_none());
    }

    #[test]
    fn merge_after_clear_has_no_residue(first in arb_content(), second in arb_content()) {
        let mut builder = EnvelopeBuilder::new();
        builder.set_message_id("first-id").set_content(first);
        let _ = builder.build().unwrap();

        let incoming = MessageEnvelope::new("second-id", second);
        let bytes = incoming.to_wire().unwrap();

        builder.clear();
        let decoded = builder.merge_wire(&bytes).unwrap().build().unwrap();

        prop_assert_eq!(decoded, incoming);
    }
}
