//! Shortcut service messages.

use slashwire_core::{
    FieldDescriptor, FieldKind, MessageDescriptor,
    well_known::{FIELD_MASK, TIMESTAMP},
};

use crate::enums::{ROW_STATUS, VISIBILITY};

/// A named short link.
pub static SHORTCUT: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.Shortcut",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("creator_id", 2, FieldKind::Int32),
        FieldDescriptor::new("created_time", 3, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("updated_time", 4, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("row_status", 5, FieldKind::Enum(&ROW_STATUS)),
        FieldDescriptor::new("name", 6, FieldKind::String),
        FieldDescriptor::new("link", 7, FieldKind::String),
        FieldDescriptor::new("title", 8, FieldKind::String),
        FieldDescriptor::repeated("tags", 9, FieldKind::String),
        FieldDescriptor::new("description", 10, FieldKind::String),
        FieldDescriptor::new("visibility", 11, FieldKind::Enum(&VISIBILITY)),
        FieldDescriptor::new("view_count", 12, FieldKind::Int32),
        FieldDescriptor::new("og_metadata", 13, FieldKind::Message(&OPEN_GRAPH_METADATA)),
    ],
);

/// Link preview overrides of a shortcut.
pub static OPEN_GRAPH_METADATA: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.Shortcut.OpenGraphMetadata",
    &[
        FieldDescriptor::new("title", 1, FieldKind::String),
        FieldDescriptor::new("description", 2, FieldKind::String),
        FieldDescriptor::new("image", 3, FieldKind::String),
    ],
);

pub static LIST_SHORTCUTS_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.ListShortcutsRequest", &[]);

pub static LIST_SHORTCUTS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.ListShortcutsResponse",
    &[FieldDescriptor::repeated(
        "shortcuts",
        1,
        FieldKind::Message(&SHORTCUT),
    )],
);

pub static GET_SHORTCUT_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetShortcutRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static GET_SHORTCUT_BY_NAME_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetShortcutByNameRequest",
    &[FieldDescriptor::new("name", 1, FieldKind::String)],
);

pub static CREATE_SHORTCUT_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.CreateShortcutRequest",
    &[FieldDescriptor::new("shortcut", 1, FieldKind::Message(&SHORTCUT))],
);

pub static UPDATE_SHORTCUT_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateShortcutRequest",
    &[
        FieldDescriptor::new("shortcut", 1, FieldKind::Message(&SHORTCUT)),
        FieldDescriptor::new("update_mask", 2, FieldKind::Message(&FIELD_MASK)),
    ],
);

pub static DELETE_SHORTCUT_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.DeleteShortcutRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static GET_SHORTCUT_ANALYTICS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetShortcutAnalyticsRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static GET_SHORTCUT_ANALYTICS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetShortcutAnalyticsResponse",
    &[
        FieldDescriptor::repeated("references", 1, FieldKind::Message(&ANALYTICS_ITEM)),
        FieldDescriptor::repeated("devices", 2, FieldKind::Message(&ANALYTICS_ITEM)),
        FieldDescriptor::repeated("browsers", 3, FieldKind::Message(&ANALYTICS_ITEM)),
    ],
);

/// Visit count of one referrer, device or browser.
pub static ANALYTICS_ITEM: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetShortcutAnalyticsResponse.AnalyticsItem",
    &[
        FieldDescriptor::new("name", 1, FieldKind::String),
        FieldDescriptor::new("count", 2, FieldKind::Int32),
    ],
);
