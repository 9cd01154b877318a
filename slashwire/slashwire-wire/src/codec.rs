use slashwire_core::{
    CodecError, CodecOptions, MessageCodec, MessageDescriptor, MessageValue, WireFormat,
};

use crate::{decode::decode, encode::encode_to_bytes};

/// [`MessageCodec`] for the binary tag/length/value form.
#[derive(Debug, Clone, Default)]
pub struct BinaryCodec {
    options: CodecOptions,
}

impl BinaryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}

impl MessageCodec for BinaryCodec {
    fn format(&self) -> WireFormat {
        WireFormat::Binary
    }

    fn encode(&self, value: &MessageValue) -> Result<Vec<u8>, CodecError> {
        encode_to_bytes(value)
            .map(|bytes| bytes.to_vec())
            .map_err(|e| CodecError::encode(value.descriptor().full_name, e))
    }

    fn decode(
        &self,
        descriptor: &'static MessageDescriptor,
        data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        decode(descriptor, data, &self.options)
            .map_err(|e| CodecError::decode(descriptor.full_name, e))
    }
}
