//! Conversion between calendar instants and the `(seconds, nanos)` wire pair.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::{
    error::TimestampError,
    value::{MessageValue, Value},
    well_known::TIMESTAMP,
};

const NANOS_PER_MILLI: i32 = 1_000_000;
const MAX_NANOS: i32 = 999_999_999;

/// A point in time as whole seconds since the Unix epoch plus a sub-second
/// nanosecond part in `[0, 999_999_999]`.
///
/// Instants converted into a `Timestamp` keep millisecond precision only;
/// every pair produced that way converts to an instant and back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    /// Build a pair, rejecting `nanos` outside `[0, 999_999_999]`.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, TimestampError> {
        if !(0..=MAX_NANOS).contains(&nanos) {
            return Err(TimestampError::InvalidNanos(nanos));
        }
        Ok(Self { seconds, nanos })
    }

    /// Build a pair from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        let seconds = millis.div_euclid(1000);
        // rem_euclid keeps the sub-second part non-negative before the epoch.
        let nanos = millis.rem_euclid(1000) as i32 * NANOS_PER_MILLI;
        Self { seconds, nanos }
    }

    /// Milliseconds since the Unix epoch, truncating sub-millisecond nanos.
    pub fn as_millis(&self) -> Option<i64> {
        self.seconds
            .checked_mul(1000)?
            .checked_add(i64::from(self.nanos / NANOS_PER_MILLI))
    }

    /// Convert an instant, truncating to millisecond precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }

    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimestampError> {
        if !(0..=MAX_NANOS).contains(&self.nanos) {
            return Err(TimestampError::InvalidNanos(self.nanos));
        }
        DateTime::from_timestamp(self.seconds, self.nanos as u32).ok_or(
            TimestampError::OutOfRange {
                seconds: self.seconds,
                nanos: self.nanos,
            },
        )
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        Self::from_datetime(DateTime::<Utc>::from(time))
    }

    /// Encode as a `google.protobuf.Timestamp` message value.
    pub fn to_message(&self) -> MessageValue {
        let mut message = MessageValue::new(&TIMESTAMP);
        if let Some(slot) = message.field_at_mut(0) {
            *slot = Value::I64(self.seconds);
        }
        if let Some(slot) = message.field_at_mut(1) {
            *slot = Value::I32(self.nanos);
        }
        message
    }

    /// Read a `google.protobuf.Timestamp` message value.
    pub fn from_message(message: &MessageValue) -> Result<Self, TimestampError> {
        let descriptor = message.descriptor();
        if !descriptor.is(&TIMESTAMP) {
            return Err(TimestampError::NotATimestamp(descriptor.full_name));
        }
        let seconds = message
            .get("seconds")
            .and_then(|v| v.try_i64().ok())
            .unwrap_or_default();
        let nanos = message
            .get("nanos")
            .and_then(|v| v.try_i32().ok())
            .unwrap_or_default();
        Self::new(seconds, nanos)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl TryFrom<Timestamp> for DateTime<Utc> {
    type Error = TimestampError;

    fn try_from(ts: Timestamp) -> Result<Self, Self::Error> {
        ts.to_datetime()
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::message(ts.to_message())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn truncates_to_milliseconds() {
        let dt = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(
            ts,
            Timestamp {
                seconds: 1_700_000_000,
                nanos: 123_000_000,
            }
        );
    }

    #[test]
    fn pair_instant_pair_is_idempotent() {
        let ts = Timestamp::from_millis(1_700_000_000_042);
        let back = Timestamp::from_datetime(ts.to_datetime().unwrap());
        assert_eq!(ts, back);
    }

    #[test]
    fn pre_epoch_instant_keeps_non_negative_nanos() {
        let ts = Timestamp::from_millis(-1);
        assert_eq!(
            ts,
            Timestamp {
                seconds: -1,
                nanos: 999_000_000,
            }
        );
        assert_eq!(ts.as_millis(), Some(-1));
    }

    #[test]
    fn rejects_out_of_range_nanos() {
        assert_eq!(
            Timestamp::new(0, 1_000_000_000),
            Err(TimestampError::InvalidNanos(1_000_000_000))
        );
        assert_eq!(Timestamp::new(0, -1), Err(TimestampError::InvalidNanos(-1)));
    }

    #[test]
    fn message_conversion_round_trips() {
        let ts = Timestamp::from_millis(86_400_500);
        let message = ts.to_message();
        assert_eq!(message.get("seconds"), Some(&Value::I64(86_400)));
        assert_eq!(message.get("nanos"), Some(&Value::I32(500_000_000)));
        assert_eq!(Timestamp::from_message(&message), Ok(ts));
    }
}
