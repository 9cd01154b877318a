use slashwire_core::{FieldDescriptor, FieldKind, MessageDescriptor};

/// Offset-based pagination cursor.
pub static PAGE_TOKEN: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.PageToken",
    &[
        FieldDescriptor::new("limit", 1, FieldKind::Int32),
        FieldDescriptor::new("offset", 2, FieldKind::Int32),
    ],
);
