//! Property tests for fieldsync-matching: every field lands in exactly one item.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::models::*;
use fieldsync_geometry::GeoEngine;
use fieldsync_matching::FieldMatcher;
use geo::polygon;

/// Squares on a coarse grid; neighbouring cells never overlap, so spatial
/// candidates only come from the same cell.
fn cell_square(cell: u8, jitter: f64) -> FieldGeometry {
    let x = f64::from(cell % 4) * 100.0 + jitter;
    let y = f64::from(cell / 4) * 100.0;
    FieldGeometry::Polygon(polygon![
        (x: x, y: y),
        (x: x + 10.0, y: y),
        (x: x + 10.0, y: y + 10.0),
        (x: x, y: y + 10.0),
        (x: x, y: y),
    ])
}

fn make_local(i: usize, cell: u8, jitter: f64, source: Option<usize>, start_year: i32) -> LocalField {
    LocalField {
        b_id: format!("L{i}"),
        b_id_source: source.map(|r| format!("R{r}")),
        b_name: format!("Kavel {i}"),
        b_geometry: cell_square(cell, jitter),
        b_start: Utc.with_ymd_and_hms(start_year, 1, 1, 0, 0, 0).unwrap(),
        b_end: None,
        b_acquiring_method: "owner".to_string(),
        cultivations: vec![],
    }
}

fn make_remote(i: usize, cell: u8, jitter: f64) -> RemoteField {
    RemoteField {
        crop_field_id: format!("R{i}"),
        crop_field_version: None,
        crop_field_designator: Some(format!("Kavel {i}")),
        begin_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: None,
        crop_type_code: Some("265".to_string()),
        use_title_code: None,
        geometry: cell_square(cell, jitter),
    }
}

fn local_strategy() -> impl Strategy<Value = (u8, f64, Option<usize>, i32)> {
    (
        0u8..12,
        prop_oneof![Just(0.0), 0.0f64..0.2, 0.0f64..5.0],
        proptest::option::of(0usize..10),
        2020i32..2027,
    )
}

fn remote_strategy() -> impl Strategy<Value = (u8, f64)> {
    (0u8..12, prop_oneof![Just(0.0), 0.0f64..0.2, 0.0f64..5.0])
}

fn build(
    locals: &[(u8, f64, Option<usize>, i32)],
    remotes: &[(u8, f64)],
) -> (Vec<LocalField>, Vec<RemoteField>) {
    let locals = locals
        .iter()
        .enumerate()
        .map(|(i, &(cell, jitter, source, start))| make_local(i, cell, jitter, source, start))
        .collect();
    let remotes = remotes
        .iter()
        .enumerate()
        .map(|(i, &(cell, jitter))| make_remote(i, cell, jitter))
        .collect();
    (locals, remotes)
}

fn run(locals: &[LocalField], remotes: &[RemoteField]) -> Vec<ReviewItem> {
    FieldMatcher::new(Box::new(GeoEngine::new())).match_fields(
        locals,
        remotes,
        ReviewYear::new(2025).unwrap(),
        None,
    )
}

proptest! {
    #[test]
    fn prop_every_field_appears_exactly_once(
        local_layout in proptest::collection::vec(local_strategy(), 0..10),
        remote_layout in proptest::collection::vec(remote_strategy(), 0..10),
    ) {
        let (locals, remotes) = build(&local_layout, &remote_layout);
        let items = run(&locals, &remotes);

        let mut local_seen: HashMap<&str, usize> = HashMap::new();
        let mut remote_seen: HashMap<&str, usize> = HashMap::new();
        for item in &items {
            if let Some(local) = item.local_field() {
                *local_seen.entry(local.b_id.as_str()).or_default() += 1;
            }
            if let Some(remote) = item.remote_field() {
                *remote_seen.entry(remote.crop_field_id.as_str()).or_default() += 1;
            }
        }

        prop_assert_eq!(local_seen.len(), locals.len());
        prop_assert_eq!(remote_seen.len(), remotes.len());
        prop_assert!(local_seen.values().all(|&n| n == 1));
        prop_assert!(remote_seen.values().all(|&n| n == 1));
    }
}

proptest! {
    #[test]
    fn prop_diffs_non_empty_iff_conflict(
        local_layout in proptest::collection::vec(local_strategy(), 0..10),
        remote_layout in proptest::collection::vec(remote_strategy(), 0..10),
    ) {
        let (locals, remotes) = build(&local_layout, &remote_layout);
        for item in run(&locals, &remotes) {
            match item.status() {
                ReviewStatus::Conflict => prop_assert!(!item.diffs().is_empty()),
                _ => prop_assert!(item.diffs().is_empty()),
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_deterministic(
        local_layout in proptest::collection::vec(local_strategy(), 0..8),
        remote_layout in proptest::collection::vec(remote_strategy(), 0..8),
    ) {
        let (locals, remotes) = build(&local_layout, &remote_layout);
        prop_assert_eq!(run(&locals, &remotes), run(&locals, &remotes));
    }
}

proptest! {
    #[test]
    fn prop_status_groups_follow_output_order(
        local_layout in proptest::collection::vec(local_strategy(), 0..10),
        remote_layout in proptest::collection::vec(remote_strategy(), 0..10),
    ) {
        let (locals, remotes) = build(&local_layout, &remote_layout);
        let items = run(&locals, &remotes);
        // Orphans come last: once one appears, nothing after it carries a remote field.
        let first_orphan = items
            .iter()
            .position(|item| item.remote_field().is_none())
            .unwrap_or(items.len());
        prop_assert!(items[first_orphan..].iter().all(|item| item.remote_field().is_none()));
    }
}
