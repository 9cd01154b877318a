//! Field tags: a field number and wire category packed into one varint.

use slashwire_core::{MAX_FIELD_NUMBER, WireCategory, WireError};

/// Field number and wire category read from or written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field_number: u32,
    pub category: WireCategory,
}

impl Tag {
    pub const fn new(field_number: u32, category: WireCategory) -> Self {
        Self {
            field_number,
            category,
        }
    }

    /// Combined integer `(field_number << 3) | category`.
    pub const fn to_u64(self) -> u64 {
        ((self.field_number as u64) << 3) | self.category.as_u8() as u64
    }

    /// Split a raw tag integer read at `offset`.
    pub fn from_u64(raw: u64, offset: usize) -> Result<Self, WireError> {
        let number = raw >> 3;
        if number == 0 || number > u64::from(MAX_FIELD_NUMBER) {
            return Err(WireError::InvalidFieldNumber { number, offset });
        }
        let value = (raw & 0x7) as u8;
        let category =
            WireCategory::from_u8(value).ok_or(WireError::InvalidWireCategory { value, offset })?;
        Ok(Self::new(number as u32, category))
    }
}
