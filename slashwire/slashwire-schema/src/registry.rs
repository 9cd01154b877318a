//! Lookup of descriptors by fully-qualified name.

use std::{collections::BTreeMap, sync::LazyLock};

use slashwire_core::{EnumMapping, FieldKind, MessageDescriptor, SchemaError, well_known};

use crate::{auth, collection, common, shortcut, user, workspace};

/// Top-level messages of the service API. Nested message and enum types are
/// reached through their fields.
static SERVICE_MESSAGES: &[&MessageDescriptor] = &[
    &common::PAGE_TOKEN,
    &shortcut::SHORTCUT,
    &shortcut::LIST_SHORTCUTS_REQUEST,
    &shortcut::LIST_SHORTCUTS_RESPONSE,
    &shortcut::GET_SHORTCUT_REQUEST,
    &shortcut::GET_SHORTCUT_BY_NAME_REQUEST,
    &shortcut::CREATE_SHORTCUT_REQUEST,
    &shortcut::UPDATE_SHORTCUT_REQUEST,
    &shortcut::DELETE_SHORTCUT_REQUEST,
    &shortcut::GET_SHORTCUT_ANALYTICS_REQUEST,
    &shortcut::GET_SHORTCUT_ANALYTICS_RESPONSE,
    &collection::COLLECTION,
    &collection::LIST_COLLECTIONS_REQUEST,
    &collection::LIST_COLLECTIONS_RESPONSE,
    &collection::GET_COLLECTION_REQUEST,
    &collection::GET_COLLECTION_BY_NAME_REQUEST,
    &collection::CREATE_COLLECTION_REQUEST,
    &collection::UPDATE_COLLECTION_REQUEST,
    &collection::DELETE_COLLECTION_REQUEST,
    &user::USER,
    &user::LIST_USERS_REQUEST,
    &user::LIST_USERS_RESPONSE,
    &user::GET_USER_REQUEST,
    &user::CREATE_USER_REQUEST,
    &user::UPDATE_USER_REQUEST,
    &user::DELETE_USER_REQUEST,
    &user::USER_ACCESS_TOKEN,
    &user::LIST_USER_ACCESS_TOKENS_REQUEST,
    &user::LIST_USER_ACCESS_TOKENS_RESPONSE,
    &user::CREATE_USER_ACCESS_TOKEN_REQUEST,
    &user::DELETE_USER_ACCESS_TOKEN_REQUEST,
    &user::USER_SETTING,
    &user::GET_USER_SETTING_REQUEST,
    &user::UPDATE_USER_SETTING_REQUEST,
    &workspace::WORKSPACE_PROFILE,
    &workspace::WORKSPACE_SETTING,
    &workspace::GET_WORKSPACE_PROFILE_REQUEST,
    &workspace::GET_WORKSPACE_SETTING_REQUEST,
    &workspace::UPDATE_WORKSPACE_SETTING_REQUEST,
    &workspace::SUBSCRIPTION,
    &workspace::GET_SUBSCRIPTION_REQUEST,
    &workspace::UPDATE_SUBSCRIPTION_REQUEST,
    &workspace::DELETE_SUBSCRIPTION_REQUEST,
    &auth::GET_AUTH_STATUS_REQUEST,
    &auth::SIGN_IN_REQUEST,
    &auth::SIGN_IN_WITH_SSO_REQUEST,
    &auth::SIGN_UP_REQUEST,
    &auth::SIGN_OUT_REQUEST,
    &well_known::EMPTY,
];

static SERVICE_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut registry = Registry::new();
    for &descriptor in SERVICE_MESSAGES {
        registry.register(descriptor);
    }
    registry
});

/// Message and enum tables keyed by fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    messages: BTreeMap<&'static str, &'static MessageDescriptor>,
    enums: BTreeMap<&'static str, &'static EnumMapping>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message and enum type of the service API.
    pub fn service() -> &'static Registry {
        &SERVICE_REGISTRY
    }

    /// Add `descriptor` and every message and enum type reachable from its
    /// fields.
    pub fn register(&mut self, descriptor: &'static MessageDescriptor) {
        if self.messages.contains_key(descriptor.full_name) {
            return;
        }
        self.messages.insert(descriptor.full_name, descriptor);
        for field in descriptor.fields {
            match field.kind {
                FieldKind::Message(nested) => self.register(nested),
                FieldKind::Enum(mapping) => {
                    self.enums.insert(mapping.full_name, mapping);
                }
                _ => {}
            }
        }
    }

    /// Look up a message by full name (a leading `.` is ignored), or by its
    /// short name when exactly one registered message has it.
    pub fn message(&self, name: &str) -> Option<&'static MessageDescriptor> {
        let name = name.strip_prefix('.').unwrap_or(name);
        if let Some(&descriptor) = self.messages.get(name) {
            return Some(descriptor);
        }
        let mut matches = self.messages().filter(|d| d.name() == name);
        match (matches.next(), matches.next()) {
            (Some(descriptor), None) => Some(descriptor),
            _ => None,
        }
    }

    pub fn enum_mapping(&self, name: &str) -> Option<&'static EnumMapping> {
        let name = name.strip_prefix('.').unwrap_or(name);
        self.enums.get(name).copied()
    }

    /// Messages in full-name order.
    pub fn messages(&self) -> impl Iterator<Item = &'static MessageDescriptor> + '_ {
        self.messages.values().copied()
    }

    /// Enums in full-name order.
    pub fn enums(&self) -> impl Iterator<Item = &'static EnumMapping> + '_ {
        self.enums.values().copied()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Check every registered message for duplicate or out-of-range field
    /// numbers and duplicate names.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.messages().try_for_each(MessageDescriptor::validate)
    }
}
