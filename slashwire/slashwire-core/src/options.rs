//! Codec configuration fixed at construction time.

use crate::error::{MAX_SAFE_INTEGER, WireError};

/// Numeric domain that backs 64-bit integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Int64Repr {
    /// Values are consumed as double-precision numbers; decoding a value
    /// outside `±(2^53 - 1)` fails with [`WireError::PrecisionLoss`].
    #[default]
    SafeNumber,
    /// Values keep their full 64-bit range.
    Exact,
}

impl Int64Repr {
    /// Apply the integer-range guard to a decoded signed value.
    pub fn check_i64(self, field: &str, value: i64) -> Result<i64, WireError> {
        match self {
            Self::SafeNumber if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) => {
                Err(WireError::PrecisionLoss {
                    field: field.to_string(),
                    value: value.into(),
                })
            }
            _ => Ok(value),
        }
    }

    /// Apply the integer-range guard to a decoded unsigned value.
    pub fn check_u64(self, field: &str, value: u64) -> Result<u64, WireError> {
        match self {
            Self::SafeNumber if value > MAX_SAFE_INTEGER as u64 => Err(WireError::PrecisionLoss {
                field: field.to_string(),
                value: value.into(),
            }),
            _ => Ok(value),
        }
    }
}

/// Immutable settings shared by every codec built from them.
///
/// There is no process-wide mutable configuration: each codec owns a copy of
/// the options it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodecOptions {
    pub int64_repr: Int64Repr,
    /// Payloads larger than this are rejected before decoding starts.
    pub max_message_size: Option<usize>,
}

impl CodecOptions {
    pub fn new(int64_repr: Int64Repr) -> Self {
        Self {
            int64_repr,
            max_message_size: None,
        }
    }

    pub fn with_max_message_size(mut self, max: usize) -> Self {
        self.max_message_size = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_number_accepts_boundary() {
        let repr = Int64Repr::SafeNumber;
        assert_eq!(repr.check_i64("seconds", MAX_SAFE_INTEGER), Ok(MAX_SAFE_INTEGER));
        assert_eq!(repr.check_i64("seconds", -MAX_SAFE_INTEGER), Ok(-MAX_SAFE_INTEGER));
        assert_eq!(
            repr.check_u64("count", MAX_SAFE_INTEGER as u64),
            Ok(MAX_SAFE_INTEGER as u64)
        );
    }

    #[test]
    fn safe_number_rejects_two_pow_53() {
        let err = Int64Repr::SafeNumber
            .check_i64("seconds", 1 << 53)
            .expect_err("2^53 must be rejected");
        assert_eq!(
            err,
            WireError::PrecisionLoss {
                field: "seconds".to_string(),
                value: 1 << 53,
            }
        );
        assert!(Int64Repr::SafeNumber.check_u64("count", u64::MAX).is_err());
        assert!(Int64Repr::SafeNumber.check_i64("seconds", i64::MIN).is_err());
    }

    #[test]
    fn exact_accepts_full_range() {
        assert_eq!(Int64Repr::Exact.check_i64("seconds", i64::MAX), Ok(i64::MAX));
        assert_eq!(Int64Repr::Exact.check_u64("count", u64::MAX), Ok(u64::MAX));
    }
}
