//! Descriptor-driven message decoding.

use slashwire_core::{
    CodecOptions, FieldDescriptor, FieldKind, MessageDescriptor, MessageValue, Value,
    WireCategory, WireError,
};

use crate::reader::Reader;

/// Decode exactly one message of type `descriptor` from `data`.
pub fn decode(
    descriptor: &'static MessageDescriptor,
    data: &[u8],
    options: &CodecOptions,
) -> Result<MessageValue, WireError> {
    let mut reader = Reader::from_slice(data);
    decode_message(descriptor, &mut reader, options)
}

/// Decode a message from every remaining byte of `reader`.
///
/// Starts from the zero value and assigns fields as their tags are read.
/// Unknown field numbers and known numbers carrying an unexpected wire
/// category are skipped. Any malformed payload aborts the whole decode.
pub fn decode_message(
    descriptor: &'static MessageDescriptor,
    reader: &mut Reader,
    options: &CodecOptions,
) -> Result<MessageValue, WireError> {
    let mut value = MessageValue::new(descriptor);
    merge_from(&mut value, reader, options)?;
    Ok(value)
}

fn merge_from(
    value: &mut MessageValue,
    reader: &mut Reader,
    options: &CodecOptions,
) -> Result<(), WireError> {
    let descriptor = value.descriptor();
    while reader.has_remaining() {
        let tag = reader.read_tag()?;
        let Some((index, field)) = descriptor.field_by_number(tag.field_number) else {
            tracing::debug!(
                message = descriptor.full_name,
                field_number = tag.field_number,
                category = %tag.category,
                "skipping unknown field"
            );
            reader.skip(tag.category)?;
            continue;
        };
        if !field.accepts_category(tag.category) {
            tracing::debug!(
                message = descriptor.full_name,
                field = field.name,
                expected = %field.wire_category(),
                category = %tag.category,
                "skipping field with mismatched wire category"
            );
            reader.skip(tag.category)?;
            continue;
        }
        let Some(slot) = value.field_at_mut(index) else {
            reader.skip(tag.category)?;
            continue;
        };

        if field.repeated {
            let items = match slot {
                Value::List(items) => items,
                other => return Err(other.type_mismatch("List").into()),
            };
            if tag.category == WireCategory::LengthDelimited && field.kind.is_packable() {
                let mut packed = reader.read_sub_reader()?;
                while packed.has_remaining() {
                    items.push(read_element(field, &mut packed, options)?);
                }
            } else {
                items.push(read_element(field, reader, options)?);
            }
            continue;
        }

        match (field.kind, slot) {
            // A singular message seen twice merges the second payload into
            // the first.
            (FieldKind::Message(_), Value::Message(Some(existing))) => {
                let mut sub = reader.read_sub_reader()?;
                merge_from(existing, &mut sub, options)?;
            }
            (_, slot) => *slot = read_element(field, reader, options)?,
        }
    }
    Ok(())
}

/// Read one element payload of `field`'s kind.
fn read_element(
    field: &FieldDescriptor,
    reader: &mut Reader,
    options: &CodecOptions,
) -> Result<Value, WireError> {
    let value = match field.kind {
        FieldKind::Int32 => Value::I32(reader.read_int32()?),
        FieldKind::Int64 => {
            let raw = reader.read_int64()?;
            Value::I64(options.int64_repr.check_i64(field.name, raw)?)
        }
        FieldKind::UInt64 => {
            let raw = reader.read_uint64()?;
            Value::U64(options.int64_repr.check_u64(field.name, raw)?)
        }
        FieldKind::Bool => Value::Bool(reader.read_bool()?),
        FieldKind::Enum(mapping) => Value::Enum(mapping.resolve(reader.read_int32()?)),
        FieldKind::Double => Value::F64(reader.read_double()?),
        FieldKind::Float => Value::F32(reader.read_float()?),
        FieldKind::String => Value::from(reader.read_string()?),
        FieldKind::Bytes => Value::bytes(reader.read_bytes()?),
        FieldKind::Message(nested) => {
            let mut sub = reader.read_sub_reader()?;
            Value::message(decode_message(nested, &mut sub, options)?)
        }
    };
    Ok(value)
}
