//! Nexus Schema Settings
//!
//! Settings accumulator for a GraphQL schema-definition framework. Callers
//! supply partial updates over time; the manager deep-merges each one into a
//! single authoritative settings object.
//!
//! ## Quick Start
//!
//! ```
//! use nexus_schema_settings::{PartialConnectionSettings, PartialSettings, create_settings_manager};
//!
//! let mut manager = create_settings_manager();
//! manager.change(PartialSettings::new().with_connection(
//!     "a",
//!     PartialConnectionSettings::new().with_field("disableForwardPagination", true),
//! ));
//!
//! let a = &manager.data().connections["a"];
//! assert_eq!(a.nexus_field_name, "connection");
//! assert_eq!(a.nexus_schema_import_id, "nexus/components/schema");
//! ```
//!
//! ## Merge Rules
//!
//! - Nested records and mappings merge key by key; primitives are replaced.
//! - Arrays are replaced wholesale, never concatenated.
//! - A field the update omits keeps its current value.
//! - `connections: {}` is a no-op, not a reset.
//! - Every connection entry carries `nexusFieldName` and `nexusSchemaImportId`,
//!   back-filled from the defaults when the caller never set them.
//!
//! Partial updates can also be given as JSON (`change_json`, `change_str`);
//! known fields with the wrong type are rejected before anything is merged.

pub mod settings;
pub mod tracing;
pub mod types;

pub use settings::{
    ConnectionBaseline, ConnectionSettings, NullableSettings, PartialConnectionSettings,
    PartialNullableSettings, PartialSettings, Settings, SettingsDefaults, SettingsManager,
    create_settings_manager,
};
pub use types::{ErrorCode, Result, SettingsError};
