use std::{
    collections::HashSet,
    fmt::{self, Debug, Display, Formatter},
};

use crate::{enum_mapping::EnumMapping, error::SchemaError, value::MessageValue, value::Value};

/// Largest field number representable in a tag.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Payload framing of one encoded field.
///
/// Discriminants are the values stored in the low three bits of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireCategory {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

impl WireCategory {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Map the low three tag bits to a category.
    ///
    /// The deprecated group categories (3 and 4) and the unassigned 6 and 7
    /// return `None`.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Varint => "varint",
            Self::Fixed64 => "fixed64",
            Self::LengthDelimited => "length-delimited",
            Self::Fixed32 => "fixed32",
        }
    }
}

impl Display for WireCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar kind of a field, with the referenced enum or message table for the
/// two reference kinds.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Int32,
    /// Signed 64-bit integer, subject to the integer-range guard.
    Int64,
    /// Unsigned 64-bit integer, subject to the integer-range guard.
    UInt64,
    Bool,
    Double,
    Float,
    String,
    Bytes,
    Enum(&'static EnumMapping),
    Message(&'static MessageDescriptor),
}

impl FieldKind {
    /// Category of a single (unpacked) element of this kind.
    pub const fn wire_category(&self) -> WireCategory {
        match self {
            Self::Int32 | Self::Int64 | Self::UInt64 | Self::Bool | Self::Enum(_) => {
                WireCategory::Varint
            }
            Self::Double => WireCategory::Fixed64,
            Self::Float => WireCategory::Fixed32,
            Self::String | Self::Bytes | Self::Message(_) => WireCategory::LengthDelimited,
        }
    }

    /// Whether repeated fields of this kind are written as one packed payload.
    pub const fn is_packable(&self) -> bool {
        !matches!(self.wire_category(), WireCategory::LengthDelimited)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::Float => "float",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
        }
    }

    /// Default value of a singular field of this kind.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Int32 => Value::I32(0),
            Self::Int64 => Value::I64(0),
            Self::UInt64 => Value::U64(0),
            Self::Bool => Value::Bool(false),
            Self::Double => Value::F64(0.0),
            Self::Float => Value::F32(0.0),
            Self::String => Value::string(""),
            Self::Bytes => Value::bytes(b""),
            Self::Enum(_) => Value::Enum(0),
            Self::Message(_) => Value::Message(None),
        }
    }

    /// Whether `value` is a valid singular value for this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Int32, Value::I32(_))
            | (Self::Int64, Value::I64(_))
            | (Self::UInt64, Value::U64(_))
            | (Self::Bool, Value::Bool(_))
            | (Self::Double, Value::F64(_))
            | (Self::Float, Value::F32(_))
            | (Self::String, Value::String(_))
            | (Self::Bytes, Value::Bytes(_))
            | (Self::Enum(_), Value::Enum(_))
            | (Self::Message(_), Value::Message(None)) => true,
            (Self::Message(desc), Value::Message(Some(m))) => desc.is(m.descriptor()),
            _ => false,
        }
    }

    /// Human-readable type label, naming the referenced table for enums and
    /// messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Enum(mapping) => format!("enum {}", mapping.full_name),
            Self::Message(desc) => format!("message {}", desc.full_name),
            other => other.type_name().to_string(),
        }
    }
}

// Reference kinds compare by full name so that recursive descriptor graphs
// never recurse during comparison or formatting.
impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Enum(a), Self::Enum(b)) => a.full_name == b.full_name,
            (Self::Message(a), Self::Message(b)) => a.is(b),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl Debug for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(mapping) => write!(f, "Enum({})", mapping.full_name),
            Self::Message(desc) => write!(f, "Message({})", desc.full_name),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Static description of one field of a message type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// Stable wire identifier; never reused across schema versions.
    pub number: u32,
    pub kind: FieldKind,
    pub repeated: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, number: u32, kind: FieldKind) -> Self {
        Self {
            name,
            number,
            kind,
            repeated: false,
        }
    }

    pub const fn repeated(name: &'static str, number: u32, kind: FieldKind) -> Self {
        Self {
            name,
            number,
            kind,
            repeated: true,
        }
    }

    /// Category this field is written with.
    ///
    /// Repeated numeric fields are packed into one length-delimited payload.
    pub const fn wire_category(&self) -> WireCategory {
        if self.repeated && self.kind.is_packable() {
            WireCategory::LengthDelimited
        } else {
            self.kind.wire_category()
        }
    }

    /// Combined tag integer `(number << 3) | category`.
    pub const fn tag(&self) -> u64 {
        ((self.number as u64) << 3) | self.wire_category().as_u8() as u64
    }

    /// Whether a tag with `category` carries data for this field.
    ///
    /// Besides the exact category, repeated numeric fields also accept single
    /// unpacked elements.
    pub fn accepts_category(&self, category: WireCategory) -> bool {
        category == self.wire_category()
            || (self.repeated && self.kind.is_packable() && category == self.kind.wire_category())
    }

    pub fn zero_value(&self) -> Value {
        if self.repeated {
            Value::List(Vec::new())
        } else {
            self.kind.zero_value()
        }
    }

    /// Whether `value` fits this field, including the repeated wrapper.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.repeated, value) {
            (true, Value::List(items)) => items
                .iter()
                .all(|item| !matches!(item, Value::Message(None)) && self.kind.accepts(item)),
            (true, _) => false,
            (false, value) => self.kind.accepts(value),
        }
    }

    /// lowerCamelCase name used by the text form.
    pub fn json_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut upper_next = false;
        for ch in self.name.chars() {
            if ch == '_' {
                upper_next = true;
            } else if upper_next {
                out.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Field table of one message type.
pub struct MessageDescriptor {
    /// Fully-qualified name, e.g. `slash.api.v1.Shortcut`.
    pub full_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    pub const fn new(full_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { full_name, fields }
    }

    /// Last segment of the full name.
    pub fn name(&self) -> &'static str {
        self.full_name
            .rsplit('.')
            .next()
            .unwrap_or(self.full_name)
    }

    /// Whether `other` describes the same message type.
    pub fn is(&self, other: &MessageDescriptor) -> bool {
        std::ptr::eq(self, other) || self.full_name == other.full_name
    }

    pub fn field_by_number(&self, number: u32) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.number == number)
    }

    pub fn field_by_name(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name == name)
    }

    /// Look up a field by its text-form name or its declared name.
    pub fn field_by_json_name(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name == name || f.json_name() == name)
    }

    /// A value with every field at its default.
    pub fn zero_value(&'static self) -> MessageValue {
        MessageValue::new(self)
    }

    /// Check number and name uniqueness and number range.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut numbers = HashSet::new();
        let mut names = HashSet::new();
        for field in self.fields {
            if field.number == 0 || field.number > MAX_FIELD_NUMBER {
                return Err(SchemaError::FieldNumberOutOfRange {
                    message: self.full_name,
                    field: field.name,
                    number: field.number,
                });
            }
            if !numbers.insert(field.number) {
                return Err(SchemaError::DuplicateFieldNumber {
                    message: self.full_name,
                    number: field.number,
                });
            }
            if !names.insert(field.name) {
                return Err(SchemaError::DuplicateFieldName {
                    message: self.full_name,
                    name: field.name,
                });
            }
        }
        Ok(())
    }
}

impl Debug for MessageDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.full_name)
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for MessageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Display for MessageDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = super::format_message_descriptor(self)?;
        f.write_str(&text)
    }
}
