//! Authentication service messages.

use slashwire_core::{FieldDescriptor, FieldKind, MessageDescriptor};

pub static GET_AUTH_STATUS_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.GetAuthStatusRequest", &[]);

pub static SIGN_IN_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.SignInRequest",
    &[
        FieldDescriptor::new("email", 1, FieldKind::String),
        FieldDescriptor::new("password", 2, FieldKind::String),
    ],
);

pub static SIGN_IN_WITH_SSO_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.SignInWithSSORequest",
    &[
        FieldDescriptor::new("idp_id", 1, FieldKind::String),
        FieldDescriptor::new("code", 2, FieldKind::String),
        FieldDescriptor::new("redirect_uri", 3, FieldKind::String),
    ],
);

pub static SIGN_UP_REQUEST: MessageDescriptor = MessageDescriptor::new(
    "slash.api.v1.SignUpRequest",
    &[
        FieldDescriptor::new("email", 1, FieldKind::String),
        FieldDescriptor::new("nickname", 2, FieldKind::String),
        FieldDescriptor::new("password", 3, FieldKind::String),
    ],
);

pub static SIGN_OUT_REQUEST: MessageDescriptor =
    MessageDescriptor::new("slash.api.v1.SignOutRequest", &[]);
