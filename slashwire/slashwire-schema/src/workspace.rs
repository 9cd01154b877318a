//! Workspace profile, workspace setting and subscription messages.

use slashwire_core::{
    FieldDescriptor, FieldKind, MessageDescriptor,
    well_known::{FIELD_MASK, TIMESTAMP},
};

use crate::enums::{PLAN_TYPE, VISIBILITY};

pub static WORKSPACE_PROFILE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.WorkspaceProfile",
    &[
        FieldDescriptor::new("mode", 1, FieldKind::String),
        FieldDescriptor::new("plan", 2, FieldKind::Enum(&PLAN_TYPE)),
        FieldDescriptor::new("version", 3, FieldKind::String),
        FieldDescriptor::new("owner", 4, FieldKind::String),
    ],
);

pub static WORKSPACE_SETTING: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.WorkspaceSetting",
    &[
        FieldDescriptor::new("license_key", 1, FieldKind::String),
        FieldDescriptor::new("custom_style", 2, FieldKind::String),
        FieldDescriptor::new("default_visibility", 3, FieldKind::Enum(&VISIBILITY)),
        FieldDescriptor::new("instance_url", 4, FieldKind::String),
        FieldDescriptor::new("disallow_user_registration", 5, FieldKind::Bool),
        FieldDescriptor::new("disallow_password_auth", 6, FieldKind::Bool),
    ],
);

pub static GET_WORKSPACE_PROFILE_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.GetWorkspaceProfileRequest", &[]);

pub static GET_WORKSPACE_SETTING_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.GetWorkspaceSettingRequest", &[]);

pub static UPDATE_WORKSPACE_SETTING_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateWorkspaceSettingRequest",
    &[
        FieldDescriptor::new("setting", 1, FieldKind::Message(&WORKSPACE_SETTING)),
        FieldDescriptor::new("update_mask", 2, FieldKind::Message(&FIELD_MASK)),
    ],
);

/// License state of the workspace.
pub static SUBSCRIPTION: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.Subscription",
    &[
        FieldDescriptor::new("plan", 1, FieldKind::Enum(&PLAN_TYPE)),
        FieldDescriptor::new("started_time", 2, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("expires_time", 3, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("seats", 4, FieldKind::Int32),
        FieldDescriptor::new("shortcuts_limit", 5, FieldKind::Int32),
        FieldDescriptor::new("collections_limit", 6, FieldKind::Int32),
    ],
);

pub static GET_SUBSCRIPTION_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.GetSubscriptionRequest", &[]);

pub static UPDATE_SUBSCRIPTION_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateSubscriptionRequest",
    &[FieldDescriptor::new("license_key", 1, FieldKind::String)],
);

pub static DELETE_SUBSCRIPTION_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.DeleteSubscriptionRequest", &[]);
