//! Attribute diffs between a matched local/remote pair.

use chrono::{DateTime, Utc};
use fieldsync_core::models::{FieldDiff, LocalField, RemoteField};
use fieldsync_core::traits::IGeometryEngine;
use fieldsync_geometry::calculate_iou;

/// Differing attributes of a matched pair, in the order
/// name, geometry, start, end. The crop code is compared by the caller
/// through [`crop_code_differs`] since it depends on the resolved cultivation.
///
/// `geometry_threshold` is the IoU below which the geometries count as changed.
pub fn detect_diffs(
    engine: &dyn IGeometryEngine,
    local: &LocalField,
    remote: &RemoteField,
    geometry_threshold: f64,
) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();

    if remote
        .designator()
        .is_some_and(|name| name != local.b_name)
    {
        diffs.push(FieldDiff::Name);
    }

    if calculate_iou(engine, &local.b_geometry, &remote.geometry) < geometry_threshold {
        diffs.push(FieldDiff::Geometry);
    }

    if !same_day(Some(local.b_start), Some(remote.begin_date)) {
        diffs.push(FieldDiff::Start);
    }

    if !same_day(local.b_end, remote.end_date) {
        diffs.push(FieldDiff::End);
    }

    diffs
}

/// Whether the local active crop code and the remote one differ.
/// Absent on both sides counts as equal.
pub fn crop_code_differs(local_code: Option<&str>, remote_code: Option<&str>) -> bool {
    local_code != remote_code
}

/// Calendar-date equality; time of day is ignored and two absent dates are equal.
fn same_day(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> bool {
    a.map(|d| d.date_naive()) == b.map(|d| d.date_naive())
}
