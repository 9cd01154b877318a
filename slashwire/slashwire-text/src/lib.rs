//! Human-readable interchange form for `slashwire` message values.
//!
//! The text form is canonical JSON: lowerCamelCase keys, enums by name,
//! bytes as base64 and timestamps as RFC 3339 strings. Defaults are omitted
//! exactly as in the binary form, so both forms describe the same value.

mod codec;
mod error;
mod json;

use slashwire_core::{CodecOptions, MessageDescriptor, MessageValue};

pub use codec::TextCodec;
pub use error::TextError;
pub use json::{from_json, to_json};

/// Render `value` as compact JSON text.
pub fn to_text(value: &MessageValue) -> Result<String, TextError> {
    Ok(serde_json::to_string(&to_json(value)?)?)
}

/// Render `value` as indented JSON text.
pub fn to_text_pretty(value: &MessageValue) -> Result<String, TextError> {
    Ok(serde_json::to_string_pretty(&to_json(value)?)?)
}

/// Parse JSON text into a message of type `descriptor`.
pub fn from_text(
    descriptor: &'static MessageDescriptor,
    text: &str,
    options: &CodecOptions,
) -> Result<MessageValue, TextError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    from_json(descriptor, &json, options)
}
