//! User, access token and user setting messages.

use slashwire_core::{
    FieldDescriptor, FieldKind, MessageDescriptor,
    well_known::{FIELD_MASK, TIMESTAMP},
};

use crate::enums::{COLOR_THEME, LOCALE, ROLE, ROW_STATUS};

pub static USER: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.User",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("row_status", 2, FieldKind::Enum(&ROW_STATUS)),
        FieldDescriptor::new("created_time", 3, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("updated_time", 4, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("role", 6, FieldKind::Enum(&ROLE)),
        FieldDescriptor::new("email", 7, FieldKind::String),
        FieldDescriptor::new("nickname", 8, FieldKind::String),
        FieldDescriptor::new("password", 9, FieldKind::String),
    ],
);

pub static LIST_USERS_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.ListUsersRequest", &[]);

pub static LIST_USERS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.ListUsersResponse",
    &[FieldDescriptor::repeated("users", 1, FieldKind::Message(&USER))],
);

pub static GET_USER_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetUserRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static CREATE_USER_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.CreateUserRequest",
    &[FieldDescriptor::new("user", 1, FieldKind::Message(&USER))],
);

pub static UPDATE_USER_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateUserRequest",
    &[
        FieldDescriptor::new("user", 1, FieldKind::Message(&USER)),
        FieldDescriptor::new("update_mask", 2, FieldKind::Message(&FIELD_MASK)),
    ],
);

pub static DELETE_USER_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.DeleteUserRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

/// A personal API token. `expires_at` is absent for tokens that never
/// expire.
pub static USER_ACCESS_TOKEN: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UserAccessToken",
    &[
        FieldDescriptor::new("access_token", 1, FieldKind::String),
        FieldDescriptor::new("description", 2, FieldKind::String),
        FieldDescriptor::new("issued_at", 3, FieldKind::Message(&TIMESTAMP)),
        FieldDescriptor::new("expires_at", 4, FieldKind::Message(&TIMESTAMP)),
    ],
);

pub static LIST_USER_ACCESS_TOKENS_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.ListUserAccessTokensRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static LIST_USER_ACCESS_TOKENS_RESPONSE: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.ListUserAccessTokensResponse",
    &[FieldDescriptor::repeated(
        "access_tokens",
        1,
        FieldKind::Message(&USER_ACCESS_TOKEN),
    )],
);

pub static CREATE_USER_ACCESS_TOKEN_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.CreateUserAccessTokenRequest",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("description", 2, FieldKind::String),
        FieldDescriptor::new("expires_at", 3, FieldKind::Message(&TIMESTAMP)),
    ],
);

pub static DELETE_USER_ACCESS_TOKEN_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.DeleteUserAccessTokenRequest",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("access_token", 2, FieldKind::String),
    ],
);

pub static USER_SETTING: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UserSetting",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("locale", 2, FieldKind::Enum(&LOCALE)),
        FieldDescriptor::new("color_theme", 3, FieldKind::Enum(&COLOR_THEME)),
    ],
);

pub static GET_USER_SETTING_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.GetUserSettingRequest",
    &[FieldDescriptor::new("id", 1, FieldKind::Int32)],
);

pub static UPDATE_USER_SETTING_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.UpdateUserSettingRequest",
    &[
        FieldDescriptor::new("id", 1, FieldKind::Int32),
        FieldDescriptor::new("user_setting", 2, FieldKind::Message(&USER_SETTING)),
        FieldDescriptor::new("update_mask", 3, FieldKind::Message(&FIELD_MASK)),
    ],
);
