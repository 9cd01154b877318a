//! Bidirectional enum number / symbolic name mapping.

use std::fmt;

/// Name returned for numbers missing from a mapping.
pub const UNRECOGNIZED_NAME: &str = "UNRECOGNIZED";

/// Number returned for names or numbers missing from a mapping.
pub const UNRECOGNIZED_VALUE: i32 = -1;

/// Symbol table of one enum type.
///
/// Both directions are total: anything outside the table resolves to the
/// `UNRECOGNIZED` / `-1` sentinel instead of failing, so readers built
/// against an older schema keep decoding when the enum grows.
#[derive(Debug)]
pub struct EnumMapping {
    /// Fully-qualified name, e.g. `slash.api.v1.Visibility`.
    pub full_name: &'static str,
    /// `(name, number)` pairs in declaration order. The first entry is the
    /// zero value.
    pub values: &'static [(&'static str, i32)],
}

/// Lookup key for [`EnumMapping::value_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKey<'a> {
    Name(&'a str),
    Number(i32),
}

impl<'a> From<&'a str> for EnumKey<'a> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}

impl From<i32> for EnumKey<'_> {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl EnumMapping {
    pub const fn new(full_name: &'static str, values: &'static [(&'static str, i32)]) -> Self {
        Self { full_name, values }
    }

    /// Symbolic name of `number`, or `"UNRECOGNIZED"`.
    pub fn name_of(&self, number: i32) -> &'static str {
        self.values
            .iter()
            .find(|(_, n)| *n == number)
            .map(|(name, _)| *name)
            .unwrap_or(UNRECOGNIZED_NAME)
    }

    /// Number for a symbolic name or a number, or `-1`.
    pub fn value_of<'a>(&self, key: impl Into<EnumKey<'a>>) -> i32 {
        match key.into() {
            EnumKey::Name(name) => self
                .values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, number)| *number)
                .unwrap_or(UNRECOGNIZED_VALUE),
            EnumKey::Number(number) if self.contains(number) => number,
            EnumKey::Number(_) => UNRECOGNIZED_VALUE,
        }
    }

    pub fn contains(&self, number: i32) -> bool {
        self.values.iter().any(|(_, n)| *n == number)
    }

    /// Resolve a decoded number, replacing unknown numbers with `-1`.
    pub fn resolve(&self, number: i32) -> i32 {
        let resolved = self.value_of(number);
        if resolved == UNRECOGNIZED_VALUE && number != UNRECOGNIZED_VALUE {
            tracing::debug!(
                enum_type = self.full_name,
                value = number,
                "unrecognized enum value"
            );
        }
        resolved
    }
}

impl fmt::Display for EnumMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.full_name)?;
        for (name, number) in self.values {
            writeln!(f, "    {name} = {number}")?;
        }
        Ok(())
    }
}
