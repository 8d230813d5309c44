//! The schema sync itself: fetch the remote schema, diff it against the
//! catalog, and patch the missing fields in.
//!

use std::collections::HashSet;

use crate::api;
use crate::config::AirtableConfig;
use crate::error::AirsyncError;
use crate::model::{FieldDefinition, RemoteField, Table};

/// What a sync run did: the table as the service last reported it, and the
/// catalog fields this run added (empty when the schema was already
/// complete).
#[derive(Debug)]
pub struct SyncOutcome {
    pub table: Table,
    pub added: Vec<FieldDefinition>,
}

/// The catalog fields whose name (exact, case-sensitive match) does not
/// appear on the remote table yet. Preserves catalog order.
pub fn missing_fields(
    existing: &[RemoteField],
    desired: &[FieldDefinition],
) -> Vec<FieldDefinition> {
    let existing_names: HashSet<&str> = existing.iter().map(|field| field.name.as_str()).collect();
    desired
        .iter()
        .filter(|field| !existing_names.contains(field.name.as_str()))
        .cloned()
        .collect()
}

/// The full field list for the PATCH body: existing fields first, in their
/// remote order and round-tripped untouched, then the missing catalog fields.
pub fn merged_fields(
    existing: &[RemoteField],
    missing: &[FieldDefinition],
) -> Result<Vec<serde_json::Value>, AirsyncError> {
    let mut merged = Vec::with_capacity(existing.len() + missing.len());
    for field in existing {
        merged.push(serde_json::to_value(field)?);
    }
    for field in missing {
        merged.push(serde_json::to_value(field)?);
    }
    Ok(merged)
}

/// Fetch, diff, merge, update. When nothing is missing the PATCH is skipped
/// and the fetched schema comes back unchanged.
pub async fn sync_schema(
    config: &AirtableConfig,
    desired: &[FieldDefinition],
) -> Result<SyncOutcome, AirsyncError> {
    let table = api::client::tables::get_schema(config).await?;
    log::debug!(
        "sync_schema table {} has fields {}",
        config.table_id,
        table.fields_to_string()
    );

    let missing = missing_fields(&table.fields, desired);
    if missing.is_empty() {
        log::debug!("sync_schema nothing to add");
        return Ok(SyncOutcome {
            table,
            added: missing,
        });
    }

    let merged = merged_fields(&table.fields, &missing)?;
    let updated = api::client::tables::update_schema(config, &merged).await?;
    Ok(SyncOutcome {
        table: updated,
        added: missing,
    })
}
