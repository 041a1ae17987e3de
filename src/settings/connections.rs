//! Connection entry normalization
//!
//! Runs after the generic merge. Every merged connection patch becomes a full
//! [`ConnectionSettings`] entry: baseline fields the patch does not carry are
//! filled from the [`ConnectionBaseline`], fields it does carry are kept.

use std::collections::BTreeMap;

use super::partial::PartialConnectionSettings;
use super::types::{ConnectionBaseline, ConnectionSettings};

/// Fill in the baseline fields of a single connection entry
pub fn backfill_connection(
    connection: PartialConnectionSettings,
    baseline: &ConnectionBaseline,
) -> ConnectionSettings {
    ConnectionSettings {
        nexus_field_name: connection
            .nexus_field_name
            .unwrap_or_else(|| baseline.nexus_field_name.clone()),
        nexus_schema_import_id: connection
            .nexus_schema_import_id
            .unwrap_or_else(|| baseline.nexus_schema_import_id.clone()),
        extra: connection.extra,
    }
}

/// Fill in the baseline fields of every connection entry
pub fn backfill_connections(
    connections: BTreeMap<String, PartialConnectionSettings>,
    baseline: &ConnectionBaseline,
) -> BTreeMap<String, ConnectionSettings> {
    connections
        .into_iter()
        .map(|(name, connection)| {
            if connection.nexus_field_name.is_none() || connection.nexus_schema_import_id.is_none()
            {
                tracing::trace!(connection = %name, "Back-filling connection baseline fields");
            }
            (name, backfill_connection(connection, baseline))
        })
        .collect()
}
