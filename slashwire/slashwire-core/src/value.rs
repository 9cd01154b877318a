//! In-memory message representation produced by decoders and consumed by
//! encoders.

use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use crate::{
    error::{SchemaError, ValueTypeError},
    schema::{FieldDescriptor, FieldKind, MessageDescriptor},
};

/// Value of one message field.
///
/// Optional nested messages are an explicit `Option`: `Message(None)` is an
/// absent field, never a default instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
    /// Enum number; unrecognized numbers are stored as `-1`.
    Enum(i32),
    Message(Option<Box<MessageValue>>),
    /// Elements of a repeated field in wire order.
    List(Vec<Value>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn message(m: MessageValue) -> Self {
        Self::Message(Some(Box::new(m)))
    }

    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether this is the default for its kind: zero, empty, `false`, an
    /// empty list or an absent message.
    pub fn is_default(&self) -> bool {
        match self {
            Value::Bool(v) => !*v,
            Value::I32(v) => *v == 0,
            Value::I64(v) => *v == 0,
            Value::U64(v) => *v == 0,
            Value::F32(v) => *v == 0.0,
            Value::F64(v) => *v == 0.0,
            Value::String(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
            Value::Enum(v) => *v == 0,
            Value::Message(m) => m.is_none(),
            Value::List(items) => items.is_empty(),
        }
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(*v),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(*v),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_u64(&self) -> Result<u64, ValueTypeError> {
        match self {
            Value::U64(v) => Ok(*v),
            _ => Err(self.type_mismatch("U64")),
        }
    }

    pub fn try_f32(&self) -> Result<f32, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(*v),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<f64, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(*v),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::String(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<&[u8], ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_enum(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::Enum(v) => Ok(*v),
            _ => Err(self.type_mismatch("Enum")),
        }
    }

    pub fn try_message(&self) -> Result<Option<&MessageValue>, ValueTypeError> {
        match self {
            Value::Message(m) => Ok(m.as_deref()),
            _ => Err(self.type_mismatch("Message")),
        }
    }

    pub fn try_list(&self) -> Result<&[Value], ValueTypeError> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(self.type_mismatch("List")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::U64(_) => "U64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Enum(_) => "Enum",
            Value::Message(_) => "Message",
            Value::List(_) => "List",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Arc::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Arc::from(v))
    }
}

impl From<MessageValue> for Value {
    fn from(v: MessageValue) -> Self {
        Value::message(v)
    }
}

impl From<Option<MessageValue>> for Value {
    fn from(v: Option<MessageValue>) -> Self {
        Value::Message(v.map(Box::new))
    }
}

/// Decoded or constructed instance of one message type.
///
/// Field values are stored positionally, aligned with
/// [`MessageDescriptor::fields`]. Every slot always holds a value of its
/// field's kind.
#[derive(Clone)]
pub struct MessageValue {
    descriptor: &'static MessageDescriptor,
    fields: Vec<Value>,
}

impl MessageValue {
    /// The zero value: every field at its kind's default.
    pub fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            fields: descriptor.fields.iter().map(|f| f.zero_value()).collect(),
        }
    }

    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let (index, _) = self.descriptor.field_by_name(name)?;
        self.fields.get(index)
    }

    pub fn get_by_number(&self, number: u32) -> Option<&Value> {
        let (index, _) = self.descriptor.field_by_number(number)?;
        self.fields.get(index)
    }

    /// Assign a field by name.
    ///
    /// `I32` values are accepted for enum fields and stored as enum numbers,
    /// both for singular fields and for list elements.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SchemaError> {
        let (index, field) =
            self.descriptor
                .field_by_name(name)
                .ok_or_else(|| SchemaError::UnknownField {
                    message: self.descriptor.full_name,
                    field: name.to_string(),
                })?;
        let value = coerce(field, value.into());
        if !field.accepts(&value) {
            return Err(SchemaError::InvalidValue {
                field: field.name,
                source: value.type_mismatch(field.kind.describe()),
            });
        }
        self.fields[index] = value;
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, SchemaError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Mutable access to the slot at `index` for decoders.
    ///
    /// Callers must keep the slot's value compatible with its field.
    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.fields.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> {
        self.descriptor.fields.iter().zip(self.fields.iter())
    }

    /// Fields holding a non-default value, in declaration order.
    pub fn iter_present(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> {
        self.iter().filter(|(_, v)| !v.is_default())
    }

    /// Whether every field holds its default.
    pub fn is_zero(&self) -> bool {
        self.fields.iter().all(Value::is_default)
    }
}

fn coerce(field: &FieldDescriptor, value: Value) -> Value {
    match (field.kind, value) {
        (FieldKind::Enum(_), Value::I32(n)) => Value::Enum(n),
        (FieldKind::Enum(_), Value::List(items)) => Value::List(
            items
                .into_iter()
                .map(|item| match item {
                    Value::I32(n) => Value::Enum(n),
                    other => other,
                })
                .collect(),
        ),
        (_, value) => value,
    }
}

impl PartialEq for MessageValue {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.is(other.descriptor) && self.fields == other.fields
    }
}

impl Debug for MessageValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.descriptor.name());
        for (field, value) in self.iter() {
            s.field(field.name, value);
        }
        s.finish()
    }
}
