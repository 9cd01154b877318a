use slashwire_core::{
    CodecOptions, FieldDescriptor, FieldKind, MessageDescriptor, MessageValue, Timestamp,
    UNRECOGNIZED_VALUE, Value, WireError, well_known,
};
use slashwire_schema::{
    Registry, RowStatus, Visibility,
    collection::COLLECTION,
    shortcut::{LIST_SHORTCUTS_RESPONSE, OPEN_GRAPH_METADATA, SHORTCUT, UPDATE_SHORTCUT_REQUEST},
};
use slashwire_text::{from_text, to_text};
use slashwire_wire::{Writer, decode, encode_to_bytes};

fn options() -> CodecOptions {
    CodecOptions::default()
}

fn encode(value: &MessageValue) -> Vec<u8> {
    encode_to_bytes(value).unwrap().to_vec()
}

fn sample_shortcut() -> MessageValue {
    MessageValue::new(&SHORTCUT)
        .with("id", 7)
        .unwrap()
        .with("name", "s/foo")
        .unwrap()
        .with("tags", Value::list(["a", "b"]))
        .unwrap()
        .with("visibility", Visibility::Public)
        .unwrap()
}

// ── registry ────────────────────────────────────────────────────────────

#[test]
fn service_registry_is_valid() {
    let registry = Registry::service();
    registry.validate().unwrap();
    assert!(registry.len() > 40);
    assert!(registry.message("slash.api.v1.Shortcut").is_some());
    assert!(registry.message("google.protobuf.Timestamp").is_some());
    assert!(registry.message("google.protobuf.FieldMask").is_some());
}

#[test]
fn registry_resolves_short_and_dotted_names() {
    let registry = Registry::service();
    let by_short = registry.message("OpenGraphMetadata").unwrap();
    assert!(by_short.is(&OPEN_GRAPH_METADATA));
    assert!(registry.message(".slash.api.v1.Collection").unwrap().is(&COLLECTION));
    assert!(registry.message("NoSuchMessage").is_none());
}

#[test]
fn registry_collects_enums_through_fields() {
    let registry = Registry::service();
    let names: Vec<_> = registry.enums().map(|e| e.full_name).collect();
    assert!(names.contains(&"slash.api.v1.Visibility"));
    assert!(names.contains(&"slash.api.v1.RowStatus"));
    assert!(names.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        registry.enum_mapping("slash.api.v1.Visibility").unwrap().name_of(3),
        "PUBLIC"
    );
}

#[test]
fn every_zero_value_encodes_to_nothing() {
    for descriptor in Registry::service().messages() {
        let zero = descriptor.zero_value();
        let bytes = encode(&zero);
        assert!(bytes.is_empty(), "{}", descriptor.full_name);
        assert_eq!(decode(descriptor, &bytes, &options()).unwrap(), zero);
        if !well_known::is_well_known(descriptor) {
            assert_eq!(to_text(&zero).unwrap(), "{}", "{}", descriptor.full_name);
        }
    }
}

// ── shortcut ────────────────────────────────────────────────────────────

#[test]
fn shortcut_encodes_to_expected_bytes() {
    let bytes = encode(&sample_shortcut());
    assert_eq!(
        bytes,
        [
            0x08, 0x07, // id
            0x32, 0x05, b's', b'/', b'f', b'o', b'o', // name
            0x4A, 0x01, b'a', 0x4A, 0x01, b'b', // tags
            0x58, 0x03, // visibility
        ]
    );
    assert_eq!(decode(&SHORTCUT, &bytes, &options()).unwrap(), sample_shortcut());
}

#[test]
fn shortcut_text_form_uses_enum_names() {
    let text = to_text(&sample_shortcut()).unwrap();
    assert_eq!(
        text,
        r#"{"id":7,"name":"s/foo","tags":["a","b"],"visibility":"PUBLIC"}"#
    );
    assert_eq!(from_text(&SHORTCUT, &text, &options()).unwrap(), sample_shortcut());
}

#[test]
fn shortcut_with_timestamps_and_metadata_round_trips() {
    let og = MessageValue::new(&OPEN_GRAPH_METADATA)
        .with("title", "Foo")
        .unwrap()
        .with("image", "https://example.com/foo.png")
        .unwrap();
    let value = sample_shortcut()
        .with("created_time", Timestamp::from_millis(1_700_000_000_000))
        .unwrap()
        .with("updated_time", Timestamp::from_millis(1_700_000_123_456))
        .unwrap()
        .with("row_status", RowStatus::Normal)
        .unwrap()
        .with("og_metadata", og)
        .unwrap();

    let decoded = decode(&SHORTCUT, &encode(&value), &options()).unwrap();
    assert_eq!(decoded, value);

    let text = to_text(&value).unwrap();
    assert!(text.contains(r#""updatedTime":"2023-11-14T22:15:23.456Z""#));
    assert_eq!(from_text(&SHORTCUT, &text, &options()).unwrap(), value);
}

#[test]
fn unknown_visibility_from_newer_server_is_unrecognized() {
    let mut w = Writer::new();
    w.write_int32_field(1, 7);
    w.write_int32_field(11, 99);
    let decoded = decode(&SHORTCUT, &w.finish().unwrap(), &options()).unwrap();
    assert_eq!(decoded.get("visibility"), Some(&Value::Enum(UNRECOGNIZED_VALUE)));
    assert_eq!(decoded.get("id"), Some(&Value::I32(7)));
}

#[test]
fn older_client_ignores_newer_shortcut_fields() {
    static SHORTCUT_V0: MessageDescriptor = MessageDescriptor::new(
        "slash.api.v1.Shortcut",
        &[
            FieldDescriptor::new("id", 1, FieldKind::Int32),
            FieldDescriptor::new("name", 6, FieldKind::String),
            FieldDescriptor::new("link", 7, FieldKind::String),
        ],
    );
    let value = sample_shortcut()
        .with("link", "https://example.com")
        .unwrap()
        .with("created_time", Timestamp::from_millis(1_000))
        .unwrap();

    let decoded = decode(&SHORTCUT_V0, &encode(&value), &options()).unwrap();
    assert_eq!(decoded.get("id"), Some(&Value::I32(7)));
    assert_eq!(decoded.get("name"), Some(&Value::string("s/foo")));
    assert_eq!(decoded.get("link"), Some(&Value::string("https://example.com")));
}

#[test]
fn sibling_shortcuts_with_nested_timestamps_keep_their_bounds() {
    let first = MessageValue::new(&SHORTCUT)
        .with("id", 1)
        .unwrap()
        .with("created_time", Timestamp::from_millis(1_700_000_000_250))
        .unwrap();
    let second = MessageValue::new(&SHORTCUT)
        .with("id", 2)
        .unwrap()
        .with("created_time", Timestamp::from_millis(1_700_000_123_000))
        .unwrap();
    let response = MessageValue::new(&LIST_SHORTCUTS_RESPONSE)
        .with("shortcuts", Value::list([first.clone(), second]))
        .unwrap();
    let only_first = MessageValue::new(&LIST_SHORTCUTS_RESPONSE)
        .with("shortcuts", Value::list([first]))
        .unwrap();

    let bytes = encode(&response);
    assert_eq!(
        decode(&LIST_SHORTCUTS_RESPONSE, &bytes, &options()).unwrap(),
        response
    );

    // The only valid non-empty prefix ends exactly after the first shortcut.
    let boundary = encode(&only_first).len();
    for cut in 1..bytes.len() {
        let result = decode(&LIST_SHORTCUTS_RESPONSE, &bytes[..cut], &options());
        if cut == boundary {
            assert_eq!(result.unwrap(), only_first);
        } else {
            assert!(
                matches!(result, Err(WireError::TruncatedMessage { .. })),
                "cut at {cut}: {result:?}"
            );
        }
    }
}

#[test]
fn sub_millisecond_timestamp_survives_text_form() {
    let value = sample_shortcut()
        .with("created_time", Timestamp::new(1_700_000_000, 123_456_789).unwrap())
        .unwrap();
    let decoded = decode(&SHORTCUT, &encode(&value), &options()).unwrap();

    let text = to_text(&decoded).unwrap();
    assert!(text.contains(r#""createdTime":"2023-11-14T22:13:20.123456789Z""#));
    assert_eq!(from_text(&SHORTCUT, &text, &options()).unwrap(), decoded);
}

#[test]
fn decoded_out_of_range_timestamp_still_renders() {
    let mut w = Writer::new();
    w.write_int32_field(1, 7);
    w.write_tag(3, slashwire_core::WireCategory::LengthDelimited);
    w.fork();
    w.write_varint_field(1, 5);
    w.write_int32_field(2, 2_000_000_000);
    w.join().unwrap();
    let decoded = decode(&SHORTCUT, &w.finish().unwrap(), &options()).unwrap();

    let text = to_text(&decoded).unwrap();
    assert_eq!(
        text,
        r#"{"createdTime":{"nanos":2000000000,"seconds":5},"id":7}"#
    );
    assert_eq!(from_text(&SHORTCUT, &text, &options()).unwrap(), decoded);
}

#[test]
fn update_request_merges_partial_shortcut() {
    let partial = MessageValue::new(&SHORTCUT)
        .with("title", "Foo docs")
        .unwrap()
        .with("visibility", Visibility::Workspace)
        .unwrap();
    let request = MessageValue::new(&UPDATE_SHORTCUT_REQUEST)
        .with("shortcut", partial.clone())
        .unwrap()
        .with("update_mask", well_known::field_mask(["title", "visibility"]))
        .unwrap();

    let decoded = decode(&UPDATE_SHORTCUT_REQUEST, &encode(&request), &options()).unwrap();
    assert_eq!(decoded, request);

    let mask = decoded.get("update_mask").unwrap().try_message().unwrap().unwrap();
    assert_eq!(
        well_known::field_mask_paths(mask).unwrap(),
        ["title", "visibility"]
    );

    let merged = sample_shortcut().merge(&partial).unwrap();
    assert_eq!(merged.get("name"), Some(&Value::string("s/foo")));
    assert_eq!(merged.get("title"), Some(&Value::string("Foo docs")));
    assert_eq!(
        merged.get("visibility"),
        Some(&Value::from(Visibility::Workspace))
    );
}

// ── collection ──────────────────────────────────────────────────────────

#[test]
fn collection_shortcut_ids_are_packed() {
    let value = MessageValue::new(&COLLECTION)
        .with("shortcut_ids", Value::list([3, 1, 2]))
        .unwrap();
    let bytes = encode(&value);
    assert_eq!(bytes, [0x4A, 0x03, 0x03, 0x01, 0x02]);
    assert_eq!(decode(&COLLECTION, &bytes, &options()).unwrap(), value);
}

#[test]
fn shortcut_schema_pretty_prints() {
    let text = SHORTCUT.to_string();
    assert!(text.starts_with("slash.api.v1.Shortcut\n"));
    assert!(text.contains(
        "    visibility(11): { type: enum slash.api.v1.Visibility, repeated: false, wire: varint }"
    ));
    assert!(text.contains("        type: message slash.api.v1.Shortcut.OpenGraphMetadata"));
}
