//! Descriptor-driven message encoding.

use bytes::Bytes;
use slashwire_core::{FieldDescriptor, FieldKind, MessageValue, Value, WireCategory, WireError};

use crate::writer::Writer;

/// Encode `value` into a fresh buffer.
pub fn encode_to_bytes(value: &MessageValue) -> Result<Bytes, WireError> {
    let mut writer = Writer::new();
    encode_message(value, &mut writer)?;
    writer.finish()
}

/// Append the fields of `value` to the writer's current frame.
///
/// Fields are written in declaration order. Singular scalars equal to their
/// default, empty repeated fields and absent nested messages are not written;
/// a present nested message is written even when all of its fields are
/// defaults.
pub fn encode_message(value: &MessageValue, writer: &mut Writer) -> Result<(), WireError> {
    for (field, v) in value.iter() {
        if field.repeated {
            encode_repeated(field, v, writer)?;
        } else {
            encode_singular(field, v, writer)?;
        }
    }
    Ok(())
}

fn encode_singular(
    field: &FieldDescriptor,
    value: &Value,
    writer: &mut Writer,
) -> Result<(), WireError> {
    if value.is_default() {
        return Ok(());
    }
    writer.write_tag(field.number, field.kind.wire_category());
    write_payload(field.kind, value, writer)
}

fn encode_repeated(
    field: &FieldDescriptor,
    value: &Value,
    writer: &mut Writer,
) -> Result<(), WireError> {
    let items = value.try_list()?;
    if items.is_empty() {
        return Ok(());
    }
    if field.kind.is_packable() {
        writer.write_tag(field.number, WireCategory::LengthDelimited);
        writer.fork();
        for item in items {
            write_payload(field.kind, item, writer)?;
        }
        return writer.join();
    }
    for item in items {
        writer.write_tag(field.number, field.kind.wire_category());
        write_payload(field.kind, item, writer)?;
    }
    Ok(())
}

/// Write one element payload, without its tag.
fn write_payload(kind: FieldKind, value: &Value, writer: &mut Writer) -> Result<(), WireError> {
    match kind {
        FieldKind::Int32 => writer.write_int32(value.try_i32()?),
        FieldKind::Int64 => writer.write_varint(value.try_i64()? as u64),
        FieldKind::UInt64 => writer.write_varint(value.try_u64()?),
        FieldKind::Bool => writer.write_varint(u64::from(value.try_bool()?)),
        FieldKind::Enum(_) => writer.write_int32(value.try_enum()?),
        FieldKind::Double => writer.write_fixed64(value.try_f64()?.to_bits()),
        FieldKind::Float => writer.write_fixed32(value.try_f32()?.to_bits()),
        FieldKind::String => writer.write_length_delimited(value.try_str()?.as_bytes()),
        FieldKind::Bytes => writer.write_length_delimited(value.try_bytes()?),
        FieldKind::Message(_) => {
            writer.fork();
            if let Some(nested) = value.try_message()? {
                encode_message(nested, writer)?;
            }
            writer.join()?;
        }
    }
    Ok(())
}
