//! Static message and field descriptors.

mod format;
mod types;

pub use format::format_message_descriptor;
pub use types::{FieldDescriptor, FieldKind, MAX_FIELD_NUMBER, MessageDescriptor, WireCategory};
