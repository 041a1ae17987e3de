//! Partial settings updates
//!
//! Every field is optional: a missing field (or an explicit `null` on a known
//! field) means "leave the current value alone".

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::DeepMerge;
use super::types::ConnectionSettings;
use crate::types::{Result, SettingsError};

/// A subset of [`Settings`](super::Settings), each field itself possibly partial
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<BTreeMap<String, PartialConnectionSettings>>,

    #[serde(
        default,
        rename = "generateGraphQLSDLFile",
        skip_serializing_if = "Option::is_none"
    )]
    pub generate_graphql_sdl_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<PartialNullableSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_typings_glob_pattern: Option<String>,
}

/// Partial nullability defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialNullableSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<bool>,
}

/// Partial settings for one connection type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConnectionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexus_field_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexus_schema_import_id: Option<String>,

    /// Pass-through fields, merged as JSON values
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialSettings {
    /// Create an empty partial update
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a partial update from a JSON value
    ///
    /// Known fields with the wrong type are rejected; unknown top-level
    /// fields are ignored.
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(SettingsError::from_partial)
    }

    /// Set one authorization entry
    pub fn with_authorization(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.authorization
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add or extend one connection type
    pub fn with_connection(
        mut self,
        name: impl Into<String>,
        connection: PartialConnectionSettings,
    ) -> Self {
        self.connections
            .get_or_insert_with(BTreeMap::new)
            .entry(name.into())
            .or_default()
            .deep_merge(connection);
        self
    }

    /// Replace the whole connections patch
    pub fn with_connections(
        mut self,
        connections: BTreeMap<String, PartialConnectionSettings>,
    ) -> Self {
        self.connections = Some(connections);
        self
    }

    pub fn with_generate_graphql_sdl_file(mut self, file: impl Into<String>) -> Self {
        self.generate_graphql_sdl_file = Some(file.into());
        self
    }

    pub fn with_nullable(mut self, nullable: PartialNullableSettings) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_root_typings_glob_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.root_typings_glob_pattern = Some(pattern.into());
        self
    }

    /// Wire names of the top-level fields this update provides
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.authorization.is_some() {
            fields.push("authorization");
        }
        if self.connections.is_some() {
            fields.push("connections");
        }
        if self.generate_graphql_sdl_file.is_some() {
            fields.push("generateGraphQLSDLFile");
        }
        if self.nullable.is_some() {
            fields.push("nullable");
        }
        if self.root_typings_glob_pattern.is_some() {
            fields.push("rootTypingsGlobPattern");
        }
        fields
    }

    /// Check if the update provides no top-level field at all
    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }
}

impl FromStr for PartialSettings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(SettingsError::from_partial)
    }
}

impl PartialNullableSettings {
    pub fn inputs(inputs: bool) -> Self {
        Self {
            inputs: Some(inputs),
            outputs: None,
        }
    }

    pub fn outputs(outputs: bool) -> Self {
        Self {
            inputs: None,
            outputs: Some(outputs),
        }
    }
}

impl PartialConnectionSettings {
    /// Create an empty connection patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nexus_field_name(mut self, name: impl Into<String>) -> Self {
        self.nexus_field_name = Some(name.into());
        self
    }

    pub fn with_nexus_schema_import_id(mut self, id: impl Into<String>) -> Self {
        self.nexus_schema_import_id = Some(id.into());
        self
    }

    /// Set a pass-through field such as `disableForwardPagination`
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

impl From<ConnectionSettings> for PartialConnectionSettings {
    fn from(connection: ConnectionSettings) -> Self {
        Self {
            nexus_field_name: Some(connection.nexus_field_name),
            nexus_schema_import_id: Some(connection.nexus_schema_import_id),
            extra: connection.extra,
        }
    }
}

/// Fold a later partial into an earlier one
///
/// Applying the folded partial gives the same settings as applying both in
/// order, as long as no open-ended JSON value (authorization entries,
/// pass-through connection fields) switches between object and non-object
/// across the two. When one does, the fold keeps keys that sequential
/// application would have dropped: `{"k": {"c": 3}}`, then `{"k": 1}`, then
/// `{"k": {"b": 2}}` ends as `{"b": 2}` in order but as `{"b": 2, "c": 3}`
/// when the last two are folded first.
impl DeepMerge for PartialSettings {
    fn deep_merge(&mut self, patch: Self) {
        self.authorization.deep_merge(patch.authorization);
        self.connections.deep_merge(patch.connections);
        self.generate_graphql_sdl_file
            .deep_merge(patch.generate_graphql_sdl_file);
        self.nullable.deep_merge(patch.nullable);
        self.root_typings_glob_pattern
            .deep_merge(patch.root_typings_glob_pattern);
    }
}

impl DeepMerge for PartialNullableSettings {
    fn deep_merge(&mut self, patch: Self) {
        self.inputs.deep_merge(patch.inputs);
        self.outputs.deep_merge(patch.outputs);
    }
}

impl DeepMerge for PartialConnectionSettings {
    fn deep_merge(&mut self, patch: Self) {
        self.nexus_field_name.deep_merge(patch.nexus_field_name);
        self.nexus_schema_import_id
            .deep_merge(patch.nexus_schema_import_id);
        self.extra.deep_merge(patch.extra);
    }
}
