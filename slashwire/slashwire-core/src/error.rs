//! Error types shared by the codec layers.

use std::fmt;

/// Largest integer exactly representable in an IEEE-754 double.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Malformed input and programmer errors raised while reading or writing the
/// binary wire format.
///
/// Every variant except [`WireError::UnbalancedFraming`] and
/// [`WireError::FrameUnderflow`] describes corrupt input and aborts decoding
/// of the whole top-level message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A varint ran past ten bytes, or its tenth byte carried bits beyond 64.
    #[error("malformed varint at offset {offset}")]
    MalformedVarint { offset: usize },

    /// A payload declared more bytes than remain in the enclosing window.
    #[error(
        "truncated message at offset {offset}: needed {needed} bytes, {remaining} remaining"
    )]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// `finish()` was called while nested frames were still open.
    #[error("unbalanced framing: {open_frames} nested frame(s) still open")]
    UnbalancedFraming { open_frames: usize },

    /// `join()` was called without a matching `fork()`.
    #[error("join called without a matching fork")]
    FrameUnderflow,

    /// A 64-bit integer does not fit in the double-backed numeric domain.
    #[error("value {value} of field '{field}' exceeds the safe integer range (2^53 - 1)")]
    PrecisionLoss { field: String, value: i128 },

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string payload at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// The low three tag bits named a category outside the supported four.
    #[error("invalid wire category {value} at offset {offset}")]
    InvalidWireCategory { value: u8, offset: usize },

    /// A tag carried field number zero or one above the allowed maximum.
    #[error("invalid field number {number} at offset {offset}")]
    InvalidFieldNumber { number: u64, offset: usize },

    /// A value stored in a message does not match its field descriptor.
    #[error(transparent)]
    ValueType(#[from] ValueTypeError),
}

impl WireError {
    /// Create a truncation error for a payload at `offset`.
    #[inline]
    pub fn truncated(offset: usize, needed: usize, remaining: usize) -> Self {
        Self::TruncatedMessage {
            offset,
            needed,
            remaining,
        }
    }

    /// Whether this error was caused by corrupt input rather than caller misuse.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedVarint { .. }
                | Self::TruncatedMessage { .. }
                | Self::InvalidUtf8 { .. }
                | Self::InvalidWireCategory { .. }
                | Self::InvalidFieldNumber { .. }
                | Self::PrecisionLoss { .. }
        )
    }
}

/// Returned when a [`Value`](crate::Value) does not have the variant a field
/// or accessor expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type mismatch: expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}

/// Structural problems in message descriptors or in values handed to them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two fields of one message share a number.
    #[error("duplicate field number {number} in '{message}'")]
    DuplicateFieldNumber { message: &'static str, number: u32 },

    /// Two fields of one message share a name.
    #[error("duplicate field name '{name}' in '{message}'")]
    DuplicateFieldName {
        message: &'static str,
        name: &'static str,
    },

    /// A field number is zero or above the wire maximum.
    #[error("field '{field}' in '{message}' has out-of-range number {number}")]
    FieldNumberOutOfRange {
        message: &'static str,
        field: &'static str,
        number: u32,
    },

    /// The named field does not exist on the message.
    #[error("message '{message}' has no field '{field}'")]
    UnknownField {
        message: &'static str,
        field: String,
    },

    /// Two values of different message types were combined.
    #[error("descriptor mismatch: expected '{expected}', found '{actual}'")]
    DescriptorMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A value assigned to a field has the wrong shape.
    #[error("invalid value for field '{field}': {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: ValueTypeError,
    },
}

/// Errors raised by the timestamp adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// `nanos` is outside `[0, 999_999_999]`.
    #[error("timestamp nanos {0} outside [0, 999999999]")]
    InvalidNanos(i32),

    /// The pair cannot be represented as a calendar instant.
    #[error("timestamp out of range: seconds={seconds}, nanos={nanos}")]
    OutOfRange { seconds: i64, nanos: i32 },

    /// The message handed to the adapter is not a `google.protobuf.Timestamp`.
    #[error("expected google.protobuf.Timestamp, found '{0}'")]
    NotATimestamp(&'static str),
}

/// Error returned by [`MessageCodec`](crate::MessageCodec) implementations and
/// the `slashwire` facade.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A message value could not be encoded.
    #[error("failed to encode message '{message}': {source}")]
    Encode {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Payload bytes could not be decoded.
    #[error("failed to decode message '{message}': {source}")]
    Decode {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No descriptor is registered under the requested name.
    #[error("unknown message type '{name}'")]
    UnknownMessage { name: String },

    /// The payload exceeds the configured maximum message size.
    #[error("message size {size} exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },

    /// No codec is registered for the requested format.
    #[error("no codec registered for format '{format}'")]
    NoCodec { format: String },
}

impl CodecError {
    pub fn encode(
        message: impl fmt::Display,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Encode {
            message: message.to_string(),
            source: source.into(),
        }
    }

    pub fn decode(
        message: impl fmt::Display,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Decode {
            message: message.to_string(),
            source: source.into(),
        }
    }
}
