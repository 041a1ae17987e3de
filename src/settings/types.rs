//! Settings structures and their documented defaults

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the connection type present in every fresh settings object
pub const DEFAULT_CONNECTION_NAME: &str = "default";
/// Default `nexusFieldName` of a connection type
pub const DEFAULT_NEXUS_FIELD_NAME: &str = "connection";
/// Default `nexusSchemaImportId` of a connection type
pub const DEFAULT_NEXUS_SCHEMA_IMPORT_ID: &str = "nexus/components/schema";
/// Default file name for the generated GraphQL SDL
pub const DEFAULT_GRAPHQL_SDL_FILE: &str = "api.graphql";
/// Default glob used to discover root typing modules
pub const DEFAULT_ROOT_TYPINGS_GLOB_PATTERN: &str = "./**/*.ts";

/// Full schema settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Open-ended authorization extension point
    #[serde(default)]
    pub authorization: Map<String, Value>,

    /// Settings per connection type name
    #[serde(default)]
    pub connections: BTreeMap<String, ConnectionSettings>,

    /// File name of the generated GraphQL SDL
    #[serde(rename = "generateGraphQLSDLFile")]
    pub generate_graphql_sdl_file: String,

    /// Nullability defaults for inputs and outputs
    pub nullable: NullableSettings,

    /// Glob used to discover root typing modules
    pub root_typings_glob_pattern: String,
}

/// Nullability defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullableSettings {
    /// Whether input fields are nullable by default
    pub inputs: bool,
    /// Whether output fields are nullable by default
    pub outputs: bool,
}

/// Settings for a single connection type
///
/// The two baseline fields are always present. Any other field a caller sets
/// (e.g. `disableForwardPagination`) is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSettings {
    /// Name of the field the connection plugin exposes
    pub nexus_field_name: String,

    /// Module the connection plugin is imported from
    pub nexus_schema_import_id: String,

    /// Pass-through fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Baseline fields every connection type inherits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionBaseline {
    pub nexus_field_name: String,
    pub nexus_schema_import_id: String,
}

/// Immutable defaults a [`SettingsManager`](super::SettingsManager) starts from
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDefaults {
    /// Initial settings object
    pub settings: Settings,
    /// Baseline back-filled into every connection entry
    pub connection: ConnectionBaseline,
}

impl Default for NullableSettings {
    fn default() -> Self {
        Self {
            inputs: true,
            outputs: true,
        }
    }
}

impl Default for ConnectionBaseline {
    fn default() -> Self {
        Self {
            nexus_field_name: DEFAULT_NEXUS_FIELD_NAME.to_string(),
            nexus_schema_import_id: DEFAULT_NEXUS_SCHEMA_IMPORT_ID.to_string(),
        }
    }
}

impl ConnectionSettings {
    /// Connection settings carrying only the given baseline
    pub fn from_baseline(baseline: &ConnectionBaseline) -> Self {
        Self {
            nexus_field_name: baseline.nexus_field_name.clone(),
            nexus_schema_import_id: baseline.nexus_schema_import_id.clone(),
            extra: Map::new(),
        }
    }

    /// Read a pass-through field
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self::from_baseline(&ConnectionBaseline::default())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            authorization: Map::new(),
            connections: BTreeMap::from([(
                DEFAULT_CONNECTION_NAME.to_string(),
                ConnectionSettings::default(),
            )]),
            generate_graphql_sdl_file: DEFAULT_GRAPHQL_SDL_FILE.to_string(),
            nullable: NullableSettings::default(),
            root_typings_glob_pattern: DEFAULT_ROOT_TYPINGS_GLOB_PATTERN.to_string(),
        }
    }
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            connection: ConnectionBaseline::default(),
        }
    }
}
