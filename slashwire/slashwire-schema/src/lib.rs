//! Message schemas of the Slash bookmark service API (`slash.api.v1`).
//!
//! Every message type is a static [`MessageDescriptor`](slashwire_core::MessageDescriptor)
//! table; enums additionally get a typed Rust enum. [`Registry::service`]
//! looks them up by name.

pub mod auth;
pub mod collection;
pub mod common;
mod enums;
mod registry;
pub mod shortcut;
pub mod user;
pub mod workspace;

pub use enums::{
    COLOR_THEME, ColorTheme, LOCALE, Locale, PLAN_TYPE, PlanType, ROLE, ROW_STATUS, Role,
    RowStatus, UnknownEnumNumber, VISIBILITY, Visibility,
};
pub use registry::Registry;
