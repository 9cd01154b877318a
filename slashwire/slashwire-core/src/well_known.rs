//! Descriptors of the `google.protobuf` well-known types used by the
//! service schemas.

use crate::{
    error::SchemaError,
    schema::{FieldDescriptor, FieldKind, MessageDescriptor},
    value::{MessageValue, Value},
};

pub static TIMESTAMP: MessageDescriptor = MessageDescriptor::new(
    "google.protobuf.Timestamp",
    &[
        FieldDescriptor::new("seconds", 1, FieldKind::Int64),
        FieldDescriptor::new("nanos", 2, FieldKind::Int32),
    ],
);

pub static FIELD_MASK: MessageDescriptor = MessageDescriptor::new(
    "google.protobuf.FieldMask",
    &[FieldDescriptor::repeated("paths", 1, FieldKind::String)],
);

pub static EMPTY: MessageDescriptor = MessageDescriptor::new("google.protobuf.Empty", &[]);

/// Build a `google.protobuf.FieldMask` value from field paths.
pub fn field_mask<S: AsRef<str>>(paths: impl IntoIterator<Item = S>) -> MessageValue {
    let mut mask = MessageValue::new(&FIELD_MASK);
    if let Some(slot) = mask.field_at_mut(0) {
        *slot = Value::List(paths.into_iter().map(Value::string).collect());
    }
    mask
}

/// Paths listed in a `google.protobuf.FieldMask` value.
pub fn field_mask_paths(mask: &MessageValue) -> Result<Vec<String>, SchemaError> {
    if !mask.descriptor().is(&FIELD_MASK) {
        return Err(SchemaError::DescriptorMismatch {
            expected: FIELD_MASK.full_name,
            actual: mask.descriptor().full_name,
        });
    }
    let paths = mask
        .fields()
        .first()
        .map(|v| v.try_list())
        .transpose()
        .map_err(|source| SchemaError::InvalidValue {
            field: "paths",
            source,
        })?
        .unwrap_or_default();
    paths
        .iter()
        .map(|p| {
            p.try_str()
                .map(str::to_string)
                .map_err(|source| SchemaError::InvalidValue {
                    field: "paths",
                    source,
                })
        })
        .collect()
}

/// Whether `descriptor` is one of the types given a special text form.
pub fn is_well_known(descriptor: &MessageDescriptor) -> bool {
    descriptor.is(&TIMESTAMP) || descriptor.is(&FIELD_MASK) || descriptor.is(&EMPTY)
}
