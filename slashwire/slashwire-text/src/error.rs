use slashwire_core::{SchemaError, TimestampError, ValueTypeError, WireError};

/// Errors raised while converting between message values and their text
/// form.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A message was given as something other than a JSON object.
    #[error("expected a JSON object for message '{message}'")]
    ExpectedObject { message: &'static str },

    /// A field value has the wrong JSON type or an unparsable content.
    #[error("invalid value for field '{field}': {detail}")]
    InvalidField { field: &'static str, detail: String },

    #[error("invalid base64 in field '{field}': {source}")]
    InvalidBase64 {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Integer-range guard failures.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A stored value does not match its field.
    #[error(transparent)]
    ValueType(#[from] ValueTypeError),
}

impl TextError {
    pub(crate) fn invalid(field: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            detail: detail.into(),
        }
    }
}
