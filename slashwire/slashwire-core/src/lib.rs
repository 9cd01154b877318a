//! Encoding-agnostic core types and codec contracts for `slashwire`.
//!
//! This crate provides the static schema tables ([`MessageDescriptor`] /
//! [`FieldDescriptor`] / [`EnumMapping`]), the in-memory [`MessageValue`]
//! representation, the timestamp adapter and the [`MessageCodec`] trait
//! implemented by the binary and text codecs.

mod codec;
mod enum_mapping;
mod error;
mod merge;
mod options;
mod schema;
mod timestamp;
mod value;
pub mod well_known;
mod wire_format;

pub use codec::MessageCodec;
pub use enum_mapping::{EnumKey, EnumMapping, UNRECOGNIZED_NAME, UNRECOGNIZED_VALUE};
pub use error::{
    CodecError, MAX_SAFE_INTEGER, SchemaError, TimestampError, ValueTypeError, WireError,
};
pub use options::{CodecOptions, Int64Repr};
pub use schema::{
    FieldDescriptor, FieldKind, MAX_FIELD_NUMBER, MessageDescriptor, WireCategory,
    format_message_descriptor,
};
pub use timestamp::Timestamp;
pub use value::{MessageValue, Value};
pub use wire_format::WireFormat;
