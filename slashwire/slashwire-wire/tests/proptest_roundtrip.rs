//! Property-based tests for varint and message round-trips.

#![allow(clippy::float_cmp)]


use proptest::prelude::*;
use slashwire_core::{CodecOptions, Int64Repr, MAX_SAFE_INTEGER, MessageValue, Value};
use slashwire_wire::{decode, decode_varint, encode_to_bytes, encode_varint, encoded_len};
use test_schema::*;

fn arb_meta() -> impl Strategy<Value = MessageValue> {
    ("[a-zA-Z ]{0,8}", prop::collection::vec(any::<u8>(), 0..8))
        .prop_map(|(title, image)| meta(&title, &image))
}

/// Strategy for entries whose 64-bit fields stay inside the safe range.
fn arb_entry() -> impl Strategy<Value = MessageValue> {
    (
        any::<i32>(),
        "[a-z/]{0,12}",
        prop::collection::vec("[a-z]{1,5}", 0..4),
        0..3i32,
        prop::option::of(arb_meta()),
        0..=MAX_SAFE_INTEGER as u64,
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()),
        prop::collection::vec(any::<i32>(), 0..8),
        -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER,
        any::<bool>(),
        prop::collection::vec(arb_meta(), 0..3),
    )
        .prop_map(
            |(id, name, tags, status, meta, count, score, ids, big, flag, children)| {
                MessageValue::new(&ENTRY)
                    .with("id", id)
                    .unwrap()
                    .with("name", name)
                    .unwrap()
                    .with("tags", Value::list(tags))
                    .unwrap()
                    .with("status", status)
                    .unwrap()
                    .with("meta", meta)
                    .unwrap()
                    .with("count", count)
                    .unwrap()
                    .with("score", score)
                    .unwrap()
                    .with("ids", Value::list(ids))
                    .unwrap()
                    .with("big", big)
                    .unwrap()
                    .with("flag", flag)
                    .unwrap()
                    .with("children", Value::list(children))
                    .unwrap()
            },
        )
}

proptest! {
    #[test]
    fn varint_roundtrip(value in any::<u64>()) {
        let mut buf = Vec::new();
        encode_varint(value, &mut buf);
        prop_assert_eq!(buf.len(), encoded_len(value));
        prop_assert_eq!(decode_varint(&buf, 0).unwrap(), (value, buf.len()));
    }

    #[test]
    fn entry_roundtrip(entry in arb_entry()) {
        let bytes = encode_to_bytes(&entry).unwrap();
        let decoded = decode(&ENTRY, &bytes, &CodecOptions::default()).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn exact_repr_admits_full_int64_range(big in any::<i64>(), count in any::<u64>()) {
        let entry = MessageValue::new(&ENTRY)
            .with("big", big)
            .unwrap()
            .with("count", count)
            .unwrap();
        let bytes = encode_to_bytes(&entry).unwrap();
        let decoded = decode(&ENTRY, &bytes, &CodecOptions::new(Int64Repr::Exact)).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = decode(&ENTRY, &data, &CodecOptions::default());
    }
}
