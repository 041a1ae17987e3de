//! Settings manager implementation
//!
//! Holds the accumulated settings and applies partial updates to them.

use std::collections::BTreeMap;

use serde_json::Value;

use super::connections::backfill_connections;
use super::merge::{DeepMerge, merge_field};
use super::partial::{PartialConnectionSettings, PartialSettings};
use super::types::{ConnectionBaseline, Settings, SettingsDefaults};
use crate::tracing::ResultTraceExt;
use crate::types::{Result, SettingsError};

impl Settings {
    /// Merge a partial update into these settings
    ///
    /// Fields the update omits keep their current value. Connection entries
    /// are normalized against `baseline` after the merge.
    pub fn apply(&mut self, partial: PartialSettings, baseline: &ConnectionBaseline) {
        let PartialSettings {
            authorization,
            connections,
            generate_graphql_sdl_file,
            nullable,
            root_typings_glob_pattern,
        } = partial;

        merge_field(&mut self.authorization, authorization);
        if let Some(connections) = connections {
            self.merge_connections(connections, baseline);
        }
        merge_field(
            &mut self.generate_graphql_sdl_file,
            generate_graphql_sdl_file,
        );
        if let Some(nullable) = nullable {
            merge_field(&mut self.nullable.inputs, nullable.inputs);
            merge_field(&mut self.nullable.outputs, nullable.outputs);
        }
        merge_field(
            &mut self.root_typings_glob_pattern,
            root_typings_glob_pattern,
        );
    }

    fn merge_connections(
        &mut self,
        patch: BTreeMap<String, PartialConnectionSettings>,
        baseline: &ConnectionBaseline,
    ) {
        // `connections: {}` leaves the mapping as it is
        if patch.is_empty() {
            return;
        }

        let mut merged: BTreeMap<String, PartialConnectionSettings> =
            std::mem::take(&mut self.connections)
                .into_iter()
                .map(|(name, connection)| (name, connection.into()))
                .collect();
        merged.deep_merge(patch);

        self.connections = backfill_connections(merged, baseline);
    }
}

/// Settings manager for accumulating partial updates
///
/// Not synchronized: callers sharing one manager must serialize `change` calls.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// The accumulated settings
    settings: Settings,
    /// Defaults the manager was created with
    defaults: SettingsDefaults,
}

/// Create a settings manager initialized to the documented defaults
pub fn create_settings_manager() -> SettingsManager {
    SettingsManager::new()
}

impl SettingsManager {
    /// Create a new settings manager with the documented defaults
    pub fn new() -> Self {
        Self::with_defaults(SettingsDefaults::default())
    }

    /// Create a settings manager starting from the given defaults
    pub fn with_defaults(defaults: SettingsDefaults) -> Self {
        Self {
            settings: defaults.settings.clone(),
            defaults,
        }
    }

    /// Apply a partial update
    pub fn change(&mut self, partial: PartialSettings) {
        tracing::debug!(fields = ?partial.touched_fields(), "Applying settings change");
        self.settings.apply(partial, &self.defaults.connection);
    }

    /// Parse a partial update from JSON and apply it
    ///
    /// The settings are left untouched when the update is rejected.
    pub fn change_json(&mut self, partial: Value) -> Result<()> {
        let partial = PartialSettings::from_json(partial).trace_context()?;
        self.change(partial);
        Ok(())
    }

    /// Parse a partial update from a JSON string and apply it
    pub fn change_str(&mut self, partial: &str) -> Result<()> {
        let partial = partial.parse::<PartialSettings>().trace_context()?;
        self.change(partial);
        Ok(())
    }

    /// Get the current settings
    pub fn data(&self) -> &Settings {
        &self.settings
    }

    /// Get the defaults this manager was created with
    pub fn defaults(&self) -> &SettingsDefaults {
        &self.defaults
    }

    /// Serialize the current settings to JSON
    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(&self.settings).map_err(SettingsError::Serialization)
    }

    /// Drop every change applied so far
    pub fn reset(&mut self) {
        tracing::debug!("Resetting settings to defaults");
        self.settings = self.defaults.settings.clone();
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::partial::PartialNullableSettings;
    use crate::settings::types::ConnectionSettings;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_manager_starts_from_defaults() {
        let manager = create_settings_manager();
        assert_eq!(manager.data(), &Settings::default());
        assert_eq!(manager.defaults(), &SettingsDefaults::default());
    }

    #[test]
    fn test_change_replaces_primitives() {
        let mut manager = SettingsManager::new();
        manager.change(
            PartialSettings::new()
                .with_generate_graphql_sdl_file("schema.graphql")
                .with_root_typings_glob_pattern("./src/**/*.ts"),
        );
        assert_eq!(manager.data().generate_graphql_sdl_file, "schema.graphql");
        assert_eq!(manager.data().root_typings_glob_pattern, "./src/**/*.ts");
    }

    #[test]
    fn test_change_nullable_is_field_wise() {
        let mut manager = SettingsManager::new();
        manager.change(PartialSettings::new().with_nullable(PartialNullableSettings::outputs(false)));
        assert!(manager.data().nullable.inputs);
        assert!(!manager.data().nullable.outputs);
    }

    #[test]
    fn test_change_authorization_deep_merges() {
        let mut manager = SettingsManager::new();
        manager
            .change_json(json!({"authorization": {"rules": {"read": true}}}))
            .unwrap();
        manager
            .change_json(json!({"authorization": {"rules": {"write": false}, "mode": "strict"}}))
            .unwrap();
        assert_eq!(
            Value::Object(manager.data().authorization.clone()),
            json!({"rules": {"read": true, "write": false}, "mode": "strict"})
        );
    }

    #[test]
    fn test_explicit_baseline_survives_later_updates() {
        let mut manager = SettingsManager::new();
        manager.change(PartialSettings::new().with_connection(
            "a",
            PartialConnectionSettings::new().with_nexus_field_name("edges"),
        ));
        manager.change(PartialSettings::new().with_connection(
            "a",
            PartialConnectionSettings::new().with_field("disableForwardPagination", true),
        ));
        let a = &manager.data().connections["a"];
        assert_eq!(a.nexus_field_name, "edges");
        assert_eq!(a.nexus_schema_import_id, "nexus/components/schema");
        assert_eq!(a.extra_field("disableForwardPagination"), Some(&json!(true)));
    }

    #[test]
    fn test_custom_defaults_drive_backfill() {
        let defaults = SettingsDefaults {
            connection: ConnectionBaseline {
                nexus_field_name: "page".to_string(),
                nexus_schema_import_id: "my/plugin".to_string(),
            },
            ..SettingsDefaults::default()
        };
        let mut manager = SettingsManager::with_defaults(defaults);
        manager.change(PartialSettings::new().with_connection("a", PartialConnectionSettings::new()));

        assert_eq!(
            manager.data().connections["a"],
            ConnectionSettings {
                nexus_field_name: "page".to_string(),
                nexus_schema_import_id: "my/plugin".to_string(),
                extra: serde_json::Map::new(),
            }
        );
        // Existing entries already carry their fields
        assert_eq!(
            manager.data().connections["default"],
            ConnectionSettings::default()
        );
    }

    #[test]
    fn test_rejected_change_leaves_state_untouched() {
        let mut manager = SettingsManager::new();
        let before = manager.data().clone();

        let err = manager
            .change_json(json!({"generateGraphQLSDLFile": 42}))
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(manager.change_str("{\"nullable\":").is_err());

        let err = manager
            .change_json(json!({"connections": {"a": null}}))
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidPartial(_)));
        assert!(!manager.data().connections.contains_key("a"));

        assert_eq!(manager.data(), &before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut manager = SettingsManager::new();
        manager
            .change_str(r#"{"connections": {"a": {}}, "nullable": {"inputs": false}}"#)
            .unwrap();
        assert_ne!(manager.data(), &Settings::default());

        manager.reset();
        assert_eq!(manager.data(), &Settings::default());
    }

    #[test]
    fn test_to_json_matches_wire_names() {
        let manager = SettingsManager::default();
        let value = manager.to_json().unwrap();
        assert_eq!(value["generateGraphQLSDLFile"], json!("api.graphql"));
        assert_eq!(
            value["connections"]["default"]["nexusSchemaImportId"],
            json!("nexus/components/schema")
        );
    }
}
