//! Field records written by the import pass.

use chrono::{DateTime, Utc};
use fieldsync_core::config::ImportConfig;
use fieldsync_core::models::{LocalField, RemoteField};
use fieldsync_core::traits::FieldRecord;

/// A field as the registry describes it: designator (or a generated name),
/// registry id as source id, registry geometry and dates.
pub fn from_remote(remote: &RemoteField, import: &ImportConfig) -> FieldRecord {
    let name = remote
        .designator()
        .map(str::to_string)
        .unwrap_or_else(|| import.fallback_name(&remote.crop_field_id));
    FieldRecord {
        name,
        source_id: Some(remote.crop_field_id.clone()),
        geometry: remote.geometry.clone(),
        start: remote.begin_date,
        end: remote.end_date,
        acquiring_method: import.acquiring_method.clone(),
    }
}

/// The registry version of an existing local field. A registry field without
/// a designator leaves the local name in place.
pub fn replaced_by_remote(
    local: &LocalField,
    remote: &RemoteField,
    import: &ImportConfig,
) -> FieldRecord {
    let mut record = from_remote(remote, import);
    if remote.designator().is_none() {
        record.name = local.b_name.clone();
    }
    record
}

/// The local field unchanged except for its end date.
pub fn closed(local: &LocalField, end: DateTime<Utc>) -> FieldRecord {
    FieldRecord {
        name: local.b_name.clone(),
        source_id: local.b_id_source.clone(),
        geometry: local.b_geometry.clone(),
        start: local.b_start,
        end: Some(end),
        acquiring_method: local.b_acquiring_method.clone(),
    }
}
