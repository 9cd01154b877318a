//! Overlay of partially-populated message values.

use crate::{
    error::SchemaError,
    value::{MessageValue, Value},
};

impl MessageValue {
    /// Overlay every present field of `partial` onto `self`.
    ///
    /// A field is present when it differs from its default. Present scalars
    /// and lists replace the base value; a present nested message is merged
    /// recursively into the base's nested message, or into the nested type's
    /// zero value when the base has none. Fields absent from both sides keep
    /// their defaults.
    pub fn merge(&self, partial: &MessageValue) -> Result<MessageValue, SchemaError> {
        if !self.descriptor().is(partial.descriptor()) {
            return Err(SchemaError::DescriptorMismatch {
                expected: self.descriptor().full_name,
                actual: partial.descriptor().full_name,
            });
        }

        let mut merged = self.clone();
        for (index, (_, overlay)) in partial.iter().enumerate() {
            if overlay.is_default() {
                continue;
            }
            let Some(slot) = merged.field_at_mut(index) else {
                continue;
            };
            *slot = merge_value(slot, overlay)?;
        }
        Ok(merged)
    }

    /// Build a complete value from a partial one: the zero value with
    /// `partial` merged on top.
    pub fn from_partial(partial: &MessageValue) -> Result<MessageValue, SchemaError> {
        MessageValue::new(partial.descriptor()).merge(partial)
    }
}

fn merge_value(base: &Value, overlay: &Value) -> Result<Value, SchemaError> {
    match (base, overlay) {
        (Value::Message(Some(base)), Value::Message(Some(overlay))) => {
            Ok(Value::message(base.merge(overlay)?))
        }
        (_, Value::Message(Some(overlay))) => Ok(Value::message(MessageValue::from_partial(
            overlay,
        )?)),
        (_, overlay) => Ok(overlay.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::{FieldDescriptor, FieldKind, MessageDescriptor},
        well_known::TIMESTAMP,
    };

    static ITEM: MessageDescriptor = MessageDescriptor::new(
        "test.Item",
        &[
            FieldDescriptor::new("id", 1, FieldKind::Int32),
            FieldDescriptor::new("title", 2, FieldKind::String),
            FieldDescriptor::repeated("tags", 3, FieldKind::String),
            FieldDescriptor::new("created", 4, FieldKind::Message(&TIMESTAMP)),
        ],
    );

    fn ts(seconds: i64, nanos: i32) -> MessageValue {
        MessageValue::new(&TIMESTAMP)
            .with("seconds", seconds)
            .unwrap()
            .with("nanos", nanos)
            .unwrap()
    }

    #[test]
    fn present_scalars_replace_base() {
        let base = MessageValue::new(&ITEM)
            .with("id", 1)
            .unwrap()
            .with("title", "old")
            .unwrap();
        let partial = MessageValue::new(&ITEM).with("title", "new").unwrap();

        let merged = base.merge(&partial).unwrap();
        assert_eq!(merged.get("id"), Some(&Value::I32(1)));
        assert_eq!(merged.get("title"), Some(&Value::string("new")));
    }

    #[test]
    fn present_list_replaces_base_list() {
        let base = MessageValue::new(&ITEM)
            .with("tags", Value::list(["a", "b"]))
            .unwrap();
        let partial = MessageValue::new(&ITEM)
            .with("tags", Value::list(["c"]))
            .unwrap();

        let merged = base.merge(&partial).unwrap();
        assert_eq!(merged.get("tags"), Some(&Value::list(["c"])));
    }

    #[test]
    fn nested_messages_merge_recursively() {
        let base = MessageValue::new(&ITEM).with("created", ts(10, 5)).unwrap();
        let partial = MessageValue::new(&ITEM).with("created", ts(0, 7)).unwrap();

        let merged = base.merge(&partial).unwrap();
        let created = merged.get("created").unwrap().try_message().unwrap().unwrap();
        assert_eq!(created.get("seconds"), Some(&Value::I64(10)));
        assert_eq!(created.get("nanos"), Some(&Value::I32(7)));
    }

    #[test]
    fn from_partial_fills_defaults() {
        let partial = MessageValue::new(&ITEM).with("id", 3).unwrap();
        let full = MessageValue::from_partial(&partial).unwrap();
        assert_eq!(full.get("title"), Some(&Value::string("")));
        assert_eq!(full.get("tags"), Some(&Value::List(vec![])));
        assert_eq!(full.get("created"), Some(&Value::Message(None)));
    }

    #[test]
    fn rejects_mismatched_descriptors() {
        let err = MessageValue::new(&ITEM)
            .merge(&MessageValue::new(&TIMESTAMP))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DescriptorMismatch { .. }));
    }
}
