//! Schema-driven message codec for the Slash bookmark service.
//!
//! [`Codec`] dispatches to the binary tag/length/value codec and, with the
//! `text` feature, to the JSON text codec. The `schema` feature adds the
//! service message types.

mod codec;

pub use codec::{Codec, CodecBuilder};
pub use slashwire_core as core;
pub use slashwire_core::{
    CodecError, CodecOptions, Int64Repr, MessageCodec, MessageDescriptor, MessageValue,
    Timestamp, Value, WireError, WireFormat,
};
#[cfg(feature = "schema")]
pub use slashwire_schema as schema;
#[cfg(feature = "text")]
pub use slashwire_text as text;
pub use slashwire_wire as wire;
