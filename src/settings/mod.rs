//! Schema settings management
//!
//! Keeps one authoritative settings object and deep-merges partial updates
//! into it. Connection entries always carry the baseline fields
//! `nexusFieldName` and `nexusSchemaImportId`, whether they existed before an
//! update or were introduced by it.

mod connections;
mod manager;
mod merge;
mod partial;
mod types;

pub use connections::{backfill_connection, backfill_connections};
pub use manager::{SettingsManager, create_settings_manager};
pub use merge::{DeepMerge, merge_field};
pub use partial::{PartialConnectionSettings, PartialNullableSettings, PartialSettings};
pub use types::{
    ConnectionBaseline, ConnectionSettings, DEFAULT_CONNECTION_NAME, DEFAULT_GRAPHQL_SDL_FILE,
    DEFAULT_NEXUS_FIELD_NAME, DEFAULT_NEXUS_SCHEMA_IMPORT_ID, DEFAULT_ROOT_TYPINGS_GLOB_PATTERN,
    NullableSettings, Settings, SettingsDefaults,
};
