//! Enum types shared by the service schemas.
//!
//! Each enum is declared once and yields both a typed Rust enum and the
//! [`EnumMapping`] table the codecs use.

use std::fmt;

use slashwire_core::{EnumMapping, Value};

/// Returned when converting a number that is not part of an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{number} is not a value of enum '{enum_type}'")]
pub struct UnknownEnumNumber {
    pub enum_type: &'static str,
    pub number: i32,
}

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $mapping:ident ($full_name:literal) {
            $($variant:ident = $number:literal => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $($variant = $number,)+
        }

        #[doc = concat!("Number/name table of `", $full_name, "`.")]
        $vis static $mapping: EnumMapping =
            EnumMapping::new($full_name, &[$(($wire, $number),)+]);

        impl $name {
            pub const fn as_i32(self) -> i32 {
                self as i32
            }

            /// Symbolic name as written on the wire's text form.
            pub fn as_str_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            pub fn from_str_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn mapping() -> &'static EnumMapping {
                &$mapping
            }
        }

        impl TryFrom<i32> for $name {
            type Error = UnknownEnumNumber;

            fn try_from(number: i32) -> Result<Self, Self::Error> {
                match number {
                    $($number => Ok(Self::$variant),)+
                    _ => Err(UnknownEnumNumber {
                        enum_type: $full_name,
                        number,
                    }),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::Enum(value.as_i32())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str_name())
            }
        }
    };
}

schema_enum! {
    /// Soft-delete state of a stored row.
    pub enum RowStatus as ROW_STATUS ("slash.api.v1.RowStatus") {
        Unspecified = 0 => "ROW_STATUS_UNSPECIFIED",
        Normal = 1 => "NORMAL",
        Archived = 2 => "ARCHIVED",
    }
}

schema_enum! {
    /// Who can resolve a shortcut or collection.
    pub enum Visibility as VISIBILITY ("slash.api.v1.Visibility") {
        Unspecified = 0 => "VISIBILITY_UNSPECIFIED",
        Private = 1 => "PRIVATE",
        Workspace = 2 => "WORKSPACE",
        Public = 3 => "PUBLIC",
    }
}

schema_enum! {
    pub enum Role as ROLE ("slash.api.v1.Role") {
        Unspecified = 0 => "ROLE_UNSPECIFIED",
        Admin = 1 => "ADMIN",
        User = 2 => "USER",
    }
}

schema_enum! {
    pub enum Locale as LOCALE ("slash.api.v1.UserSetting.Locale") {
        Unspecified = 0 => "LOCALE_UNSPECIFIED",
        En = 1 => "EN",
        Zh = 2 => "ZH",
        Fr = 3 => "FR",
        Ja = 4 => "JA",
        Ru = 5 => "RU",
    }
}

schema_enum! {
    pub enum ColorTheme as COLOR_THEME ("slash.api.v1.UserSetting.ColorTheme") {
        Unspecified = 0 => "COLOR_THEME_UNSPECIFIED",
        System = 1 => "SYSTEM",
        Light = 2 => "LIGHT",
        Dark = 3 => "DARK",
    }
}

schema_enum! {
    pub enum PlanType as PLAN_TYPE ("slash.api.v1.PlanType") {
        Unspecified = 0 => "PLAN_TYPE_UNSPECIFIED",
        Free = 1 => "FREE",
        Pro = 2 => "PRO",
        Enterprise = 3 => "ENTERPRISE",
    }
}
