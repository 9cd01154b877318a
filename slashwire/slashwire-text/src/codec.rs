use slashwire_core::{
    CodecError, CodecOptions, MessageCodec, MessageDescriptor, MessageValue, WireFormat,
};

use crate::json::{from_json, to_json};

/// [`MessageCodec`] for the JSON text form.
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    options: CodecOptions,
    pretty: bool,
}

impl TextCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            options,
            pretty: false,
        }
    }

    /// Indent encoded output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl MessageCodec for TextCodec {
    fn format(&self) -> WireFormat {
        WireFormat::Json
    }

    fn encode(&self, value: &MessageValue) -> Result<Vec<u8>, CodecError> {
        let name = value.descriptor().full_name;
        let json = to_json(value).map_err(|e| CodecError::encode(name, e))?;
        let out = if self.pretty {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        };
        out.map_err(|e| CodecError::encode(name, e))
    }

    fn decode(
        &self,
        descriptor: &'static MessageDescriptor,
        data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        let json: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| CodecError::decode(descriptor.full_name, e))?;
        from_json(descriptor, &json, &self.options)
            .map_err(|e| CodecError::decode(descriptor.full_name, e))
    }
}
