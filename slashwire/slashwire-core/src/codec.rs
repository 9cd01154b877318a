//! Codec trait implemented by each serialized form.

use crate::{
    error::CodecError, schema::MessageDescriptor, value::MessageValue, wire_format::WireFormat,
};

/// Converts message values to and from one serialized form.
///
/// Implementations are built once with their [`CodecOptions`](crate::CodecOptions)
/// and shared between threads; they hold no mutable state.
pub trait MessageCodec: Send + Sync {
    /// Returns the format this codec handles.
    fn format(&self) -> WireFormat;

    /// Serialize a message value.
    fn encode(&self, value: &MessageValue) -> Result<Vec<u8>, CodecError>;

    /// Deserialize exactly one message of type `descriptor` from `data`.
    ///
    /// Returns `Err` on malformed input; a partially decoded value is never
    /// returned.
    fn decode(
        &self,
        descriptor: &'static MessageDescriptor,
        data: &[u8],
    ) -> Result<MessageValue, CodecError>;
}
