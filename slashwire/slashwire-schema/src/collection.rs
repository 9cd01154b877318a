//! Collection service messages.

use slashwire_core::{
    FieldDescriptor, FieldKind, MessageDescriptor,
    well_known::{FIELD_MASK, TIMESTAMP},
};

use crate::enums::VISIBILITY;

/// A named, ordered group of shortcuts.
pub static COLLECTION: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.Collection",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("creator_id", 2, FieldKind::Int32),
        FieldDescriptor::new("created_time", 3, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("updated_time", 4, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("name", 6, FieldKind::String),
        FieldDescriptor::new("title", 7, FieldKind::String),
        FieldDescriptor::new("description", 8, FieldKind::String),
        FieldDescriptor::repeated("shortcut_ids", 9, FieldKind::Int32),
        FieldDescriptor::new("visibility", 10, FieldKind::Enum(&VISIBILITY)),
    ],
);

pub static LIST_COLLECTIONS_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.ListCollectionsRequest", &[]);

pub static LIST_COLLECTIONS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.ListCollectionsResponse",
    &[FieldDescriptor::repeated(
        "collections",
        1,
        FieldKind::Message(&COLLECTION),
    )],
);

pub static GET_COLLECTION_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetCollectionRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static GET_COLLECTION_BY_NAME_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetCollectionByNameRequest",
    &[FieldDescriptor::new("name", 1, FieldKind::String)],
);

pub static CREATE_COLLECTION_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.CreateCollectionRequest",
    &[FieldDescriptor::new("collection", 1, FieldKind::Message(&COLLECTION))],
);

pub static UPDATE_COLLECTION_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateCollectionRequest",
    &[
        FieldDescriptor::new("collection", 1, FieldKind::Message(&COLLECTION)),
        FieldDescriptor::new("update_mask", 2, FieldKind::Message(&FIELD_MASK)),
    ],
);

pub static DELETE_COLLECTION_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.DeleteCollectionRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);
