//! Format-dispatching codec built from immutable options.

use std::{collections::HashMap, sync::Arc};

use slashwire_core::{
    CodecError, CodecOptions, Int64Repr, MessageCodec, MessageDescriptor, MessageValue,
    WireFormat,
};
use slashwire_wire::BinaryCodec;

/// Encodes and decodes message values with the [`MessageCodec`] registered
/// for each [`WireFormat`].
///
/// A `Codec` is immutable once built and can be shared between threads.
pub struct Codec {
    codecs: HashMap<WireFormat, Arc<dyn MessageCodec>>,
    options: CodecOptions,
}

/// Builder for configuring [`Codec`].
pub struct CodecBuilder {
    codecs: Vec<Arc<dyn MessageCodec>>,
    options: CodecOptions,
    default_codecs: bool,
}

impl Codec {
    /// Create a builder for [`Codec`].
    pub fn builder() -> CodecBuilder {
        CodecBuilder {
            codecs: Vec::new(),
            options: CodecOptions::default(),
            default_codecs: false,
        }
    }

    /// A codec with the built-in formats and default options.
    pub fn new() -> Self {
        Self::builder().with_default_codecs().build()
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Formats with a registered codec.
    pub fn formats(&self) -> impl Iterator<Item = &WireFormat> {
        self.codecs.keys()
    }

    fn find_codec(&self, format: &WireFormat) -> Result<&Arc<dyn MessageCodec>, CodecError> {
        self.codecs.get(format).ok_or_else(|| CodecError::NoCodec {
            format: format.to_string(),
        })
    }

    pub fn encode(&self, format: &WireFormat, value: &MessageValue) -> Result<Vec<u8>, CodecError> {
        self.find_codec(format)?.encode(value)
    }

    /// Decode one message, rejecting payloads above the configured maximum
    /// size before any byte is read.
    pub fn decode(
        &self,
        format: &WireFormat,
        descriptor: &'static MessageDescriptor,
        data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        if let Some(max) = self.options.max_message_size
            && data.len() > max
        {
            return Err(CodecError::MessageTooLarge {
                size: data.len(),
                max,
            });
        }
        self.find_codec(format)?.decode(descriptor, data)
    }

    pub fn encode_binary(&self, value: &MessageValue) -> Result<Vec<u8>, CodecError> {
        self.encode(&WireFormat::Binary, value)
    }

    pub fn decode_binary(
        &self,
        descriptor: &'static MessageDescriptor,
        data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        self.decode(&WireFormat::Binary, descriptor, data)
    }

    /// Decode a message of a service type looked up by name.
    #[cfg(feature = "schema")]
    pub fn decode_named(
        &self,
        format: &WireFormat,
        type_name: &str,
        data: &[u8],
    ) -> Result<MessageValue, CodecError> {
        let descriptor = slashwire_schema::Registry::service()
            .message(type_name)
            .ok_or_else(|| CodecError::UnknownMessage {
                name: type_name.to_string(),
            })?;
        self.decode(format, descriptor, data)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecBuilder {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_int64_repr(mut self, repr: Int64Repr) -> Self {
        self.options.int64_repr = repr;
        self
    }

    pub fn with_max_message_size(mut self, max: usize) -> Self {
        self.options.max_message_size = Some(max);
        self
    }

    /// Register a codec; it replaces any codec for the same format,
    /// including the built-in ones.
    pub fn with_codec(mut self, codec: Box<dyn MessageCodec>) -> Self {
        self.codecs.push(Arc::from(codec));
        self
    }

    pub fn with_shared_codec(mut self, codec: Arc<dyn MessageCodec>) -> Self {
        self.codecs.push(codec);
        self
    }

    /// Register the binary codec and, with the `text` feature, the JSON
    /// codec, both built from the final options.
    pub fn with_default_codecs(mut self) -> Self {
        self.default_codecs = true;
        self
    }

    pub fn build(self) -> Codec {
        let mut codecs: HashMap<WireFormat, Arc<dyn MessageCodec>> = HashMap::new();
        if self.default_codecs {
            let binary: Arc<dyn MessageCodec> =
                Arc::new(BinaryCodec::with_options(self.options.clone()));
            codecs.insert(binary.format(), binary);
            #[cfg(feature = "text")]
            {
                let text: Arc<dyn MessageCodec> = Arc::new(
                    slashwire_text::TextCodec::with_options(self.options.clone()),
                );
                codecs.insert(text.format(), text);
            }
        }
        for codec in self.codecs {
            tracing::debug!(format = %codec.format(), "registering codec");
            codecs.insert(codec.format(), codec);
        }
        Codec {
            codecs,
            options: self.options,
        }
    }
}
