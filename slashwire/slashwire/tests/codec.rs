use std::sync::Arc;

use slashwire::{
    Codec, CodecError, CodecOptions, Int64Repr, MessageCodec, MessageDescriptor, MessageValue,
    Value, WireFormat,
    schema::{Visibility, shortcut::SHORTCUT},
};

fn sample() -> MessageValue {
    MessageValue::new(&SHORTCUT)
        .with("id", 7)
        .unwrap()
        .with("name", "s/foo")
        .unwrap()
        .with("visibility", Visibility::Public)
        .unwrap()
}

/// Codec that upper-cases the name of a message; used to check overrides.
struct NameOnly;

impl MessageCodec for NameOnly {
    fn format(&self) -> WireFormat {
        WireFormat::Unknown("name".to_string())
    }

    fn encode(&self, value: &MessageValue) -> Result<Vec<u8>, CodecError> {
        Ok(value.descriptor().full_name.to_uppercase().into_bytes())
    }

    fn decode(
        &self,
        descriptor: &'static MessageDescriptor,
        _data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        Ok(MessageValue::new(descriptor))
    }
}

#[test]
fn default_codec_round_trips_both_formats() {
    let codec = Codec::new();
    for format in [WireFormat::Binary, WireFormat::Json] {
        let bytes = codec.encode(&format, &sample()).unwrap();
        assert_eq!(codec.decode(&format, &SHORTCUT, &bytes).unwrap(), sample());
    }
}

#[test]
fn decode_named_looks_up_service_types() {
    let codec = Codec::new();
    let bytes = codec.encode_binary(&sample()).unwrap();
    assert_eq!(
        codec.decode_named(&WireFormat::Binary, "Shortcut", &bytes).unwrap(),
        sample()
    );
    let err = codec
        .decode_named(&WireFormat::Binary, "Bookmark", &bytes)
        .unwrap_err();
    assert!(matches!(err, CodecError::UnknownMessage { ref name } if name == "Bookmark"));
}

#[test]
fn oversized_payload_is_rejected_before_decoding() {
    let codec = Codec::builder()
        .with_default_codecs()
        .with_max_message_size(4)
        .build();
    let bytes = codec.encode_binary(&sample()).unwrap();
    let err = codec.decode_binary(&SHORTCUT, &bytes).unwrap_err();
    assert!(matches!(err, CodecError::MessageTooLarge { max: 4, .. }));
    assert!(codec.decode_binary(&SHORTCUT, &bytes[..2]).is_ok());
}

#[test]
fn int64_repr_reaches_default_codecs() {
    let value = MessageValue::new(&slashwire::core::well_known::TIMESTAMP)
        .with("seconds", 1i64 << 60)
        .unwrap();
    let safe = Codec::new();
    let bytes = safe.encode_binary(&value).unwrap();
    assert!(matches!(
        safe.decode_binary(&slashwire::core::well_known::TIMESTAMP, &bytes),
        Err(CodecError::Decode { .. })
    ));

    let exact = Codec::builder()
        .with_default_codecs()
        .with_int64_repr(Int64Repr::Exact)
        .build();
    assert_eq!(exact.options(), &CodecOptions::new(Int64Repr::Exact));
    assert_eq!(
        exact
            .decode_binary(&slashwire::core::well_known::TIMESTAMP, &bytes)
            .unwrap()
            .get("seconds"),
        Some(&Value::I64(1 << 60))
    );
}

#[test]
fn missing_format_is_reported() {
    let codec = Codec::builder().build();
    let err = codec.encode_binary(&sample()).unwrap_err();
    assert!(matches!(err, CodecError::NoCodec { ref format } if format == "binary"));
}

#[test]
fn custom_codecs_are_dispatched_by_format() {
    let codec = Codec::builder()
        .with_default_codecs()
        .with_shared_codec(Arc::new(NameOnly))
        .build();
    let format = WireFormat::from("name");
    assert_eq!(
        codec.encode(&format, &sample()).unwrap(),
        b"SLASH.API.V1.SHORTCUT"
    );
    assert_eq!(codec.formats().count(), 3);
}
