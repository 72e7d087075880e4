//! Integration tests for FieldMatcher: scenarios, tier precedence, thresholds, orphans.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::errors::GeometryError;
use fieldsync_core::models::*;
use fieldsync_core::traits::IGeometryEngine;
use fieldsync_geometry::GeoEngine;
use fieldsync_matching::FieldMatcher;
use geo::polygon;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn square(x: f64, y: f64, size: f64) -> FieldGeometry {
    FieldGeometry::Polygon(polygon![
        (x: x, y: y),
        (x: x + size, y: y),
        (x: x + size, y: y + size),
        (x: x, y: y + size),
        (x: x, y: y),
    ])
}

fn local(id: &str, geometry: FieldGeometry) -> LocalField {
    LocalField {
        b_id: id.to_string(),
        b_id_source: None,
        b_name: "Huiskavel".to_string(),
        b_geometry: geometry,
        b_start: date(2024, 1, 1),
        b_end: None,
        b_acquiring_method: "owner".to_string(),
        cultivations: vec![grass()],
    }
}

fn remote(id: &str, geometry: FieldGeometry) -> RemoteField {
    RemoteField {
        crop_field_id: id.to_string(),
        crop_field_version: Some("1".to_string()),
        crop_field_designator: Some("Huiskavel".to_string()),
        begin_date: date(2024, 1, 1),
        end_date: None,
        crop_type_code: Some("265".to_string()),
        use_title_code: Some("01".to_string()),
        geometry,
    }
}

fn grass() -> Cultivation {
    Cultivation {
        b_lu: "lu-grass".to_string(),
        b_lu_catalogue: "nl_265".to_string(),
        b_lu_name: "Grasland, blijvend".to_string(),
        b_lu_start: date(2024, 1, 1),
        b_lu_end: None,
    }
}

fn year(y: i32) -> ReviewYear {
    ReviewYear::new(y).unwrap()
}

fn matcher() -> FieldMatcher {
    FieldMatcher::new(Box::new(GeoEngine::new()))
}

fn run(locals: &[LocalField], remotes: &[RemoteField]) -> Vec<ReviewItem> {
    matcher().match_fields(locals, remotes, year(2025), None)
}

/// A single matched pair, asserting the pass produced exactly one item.
fn single(items: Vec<ReviewItem>) -> ReviewItem {
    assert_eq!(items.len(), 1, "expected one item, got {items:?}");
    items.into_iter().next().unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn identical_pair_is_a_match() {
    let items = run(
        &[local("f-1", square(0.0, 0.0, 10.0))],
        &[remote("R1", square(0.0, 0.0, 10.0))],
    );
    let item = single(items);
    assert_eq!(item.status(), ReviewStatus::Match);
    assert!(item.diffs().is_empty());
    assert_eq!(item.item_id(), "f-1");
    assert_eq!(
        item.remote_cultivation().map(|c| c.b_lu_catalogue.as_str()),
        Some("nl_265")
    );
}

#[test]
fn renamed_field_is_a_name_conflict() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_field_designator = Some("Kavel 7".to_string());
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.status(), ReviewStatus::Conflict);
    assert_eq!(item.diffs(), &[FieldDiff::Name]);
}

#[test]
fn missing_designator_is_not_a_name_conflict() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_field_designator = Some(String::new());
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.status(), ReviewStatus::Match);
}

#[test]
fn remote_without_local_is_new_remote() {
    let items = run(&[], &[remote("R1", square(0.0, 0.0, 10.0))]);
    let item = single(items);
    assert_eq!(item.status(), ReviewStatus::NewRemote);
    assert_eq!(item.item_id(), "R1");
    let cultivation = item.remote_cultivation().unwrap();
    assert_eq!(cultivation.b_lu_catalogue, "nl_265");
    // Without a catalogue the code doubles as the display name.
    assert_eq!(cultivation.b_lu_name, "nl_265");
}

#[test]
fn new_remote_takes_name_from_catalogue() {
    let catalogue: CultivationCatalogue = vec![CultivationCatalogueEntry {
        b_lu_catalogue: "nl_265".to_string(),
        b_lu_name: "Grasland, blijvend".to_string(),
    }]
    .into_iter()
    .collect();
    let items = matcher().match_fields(
        &[],
        &[remote("R1", square(0.0, 0.0, 10.0))],
        year(2025),
        Some(&catalogue),
    );
    let item = single(items);
    assert_eq!(
        item.remote_cultivation().map(|c| c.b_lu_name.as_str()),
        Some("Grasland, blijvend")
    );
}

#[test]
fn new_remote_without_crop_code_has_no_cultivation() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_type_code = None;
    let item = single(run(&[], &[r]));
    assert_eq!(item.status(), ReviewStatus::NewRemote);
    assert!(item.remote_cultivation().is_none());
}

#[test]
fn open_ended_field_from_before_the_year_is_expired() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_start = date(2020, 3, 1);
    let item = single(run(&[l], &[]));
    assert_eq!(item.status(), ReviewStatus::ExpiredLocal);
    assert_eq!(
        item.local_cultivation().and_then(|c| c.b_lu.as_deref()),
        Some("lu-grass")
    );
}

// ---------------------------------------------------------------------------
// Single-attribute conflicts
// ---------------------------------------------------------------------------

#[test]
fn geometry_change_beyond_one_percent_is_a_geometry_conflict() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_id_source = Some("R1".to_string());
    // IoU of a 10x10 square shifted by 0.5 is 9.5 / 10.5.
    let item = single(run(&[l], &[remote("R1", square(0.5, 0.0, 10.0))]));
    assert_eq!(item.status(), ReviewStatus::Conflict);
    assert_eq!(item.diffs(), &[FieldDiff::Geometry]);
}

#[test]
fn start_date_change_is_a_start_conflict() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.begin_date = date(2024, 2, 1);
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.diffs(), &[FieldDiff::Start]);
}

#[test]
fn start_date_time_of_day_is_ignored() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.begin_date = Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap();
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.status(), ReviewStatus::Match);
}

#[test]
fn end_date_on_one_side_is_an_end_conflict() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.end_date = Some(date(2025, 12, 31));
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.diffs(), &[FieldDiff::End]);
}

#[test]
fn crop_code_change_is_a_crop_conflict() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_type_code = Some("259".to_string());
    let item = single(run(&[local("f-1", square(0.0, 0.0, 10.0))], &[r]));
    assert_eq!(item.diffs(), &[FieldDiff::CropCode]);
}

#[test]
fn missing_crop_on_both_sides_is_equal() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.cultivations.clear();
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_type_code = None;
    let item = single(run(&[l], &[r]));
    assert_eq!(item.status(), ReviewStatus::Match);
}

#[test]
fn diffs_are_reported_in_attribute_order() {
    let mut r = remote("R1", square(0.0, 0.0, 10.0));
    r.crop_field_designator = Some("Other".to_string());
    r.end_date = Some(date(2026, 1, 1));
    r.crop_type_code = Some("259".to_string());
    r.begin_date = date(2023, 1, 1);
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_id_source = Some("R1".to_string());
    let item = single(run(&[l], &[r]));
    assert_eq!(
        item.diffs(),
        &[FieldDiff::Name, FieldDiff::Start, FieldDiff::End, FieldDiff::CropCode]
    );
}

// ---------------------------------------------------------------------------
// Tiers and thresholds
// ---------------------------------------------------------------------------

#[test]
fn spatial_threshold_is_strict() {
    // 0.04 shift → IoU ≈ 0.992, 0.06 shift → IoU ≈ 0.988.
    let close = run(
        &[local("f-1", square(0.0, 0.0, 10.0))],
        &[remote("R1", square(0.04, 0.0, 10.0))],
    );
    assert_eq!(close[0].status(), ReviewStatus::Match);

    let far = run(
        &[local("f-1", square(0.0, 0.0, 10.0))],
        &[remote("R1", square(0.06, 0.0, 10.0))],
    );
    let statuses: Vec<_> = far.iter().map(ReviewItem::status).collect();
    assert_eq!(statuses, vec![ReviewStatus::NewRemote, ReviewStatus::ExpiredLocal]);
}

#[test]
fn identifier_match_ignores_geometry() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_id_source = Some("R1".to_string());
    let items = run(&[l], &[remote("R1", square(500.0, 500.0, 10.0))]);
    let item = single(items);
    assert_eq!(item.status(), ReviewStatus::Conflict);
    assert_eq!(item.diffs(), &[FieldDiff::Geometry]);
}

#[test]
fn identifier_tier_takes_precedence_over_spatial_tier() {
    // f-2 overlaps R1 exactly but f-1 already claims it by source id.
    let mut f1 = local("f-1", square(100.0, 100.0, 10.0));
    f1.b_id_source = Some("R1".to_string());
    let f2 = local("f-2", square(0.0, 0.0, 10.0));
    let items = run(&[f2, f1], &[remote("R1", square(0.0, 0.0, 10.0))]);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_id(), "f-1");
    assert_eq!(items[0].remote_field().unwrap().crop_field_id, "R1");
    assert_eq!(items[1].item_id(), "f-2");
    assert_eq!(items[1].status(), ReviewStatus::ExpiredLocal);
}

#[test]
fn unknown_source_id_falls_through_to_spatial_tier() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_id_source = Some("R-gone".to_string());
    let item = single(run(&[l], &[remote("R1", square(0.0, 0.0, 10.0))]));
    assert_eq!(item.status(), ReviewStatus::Match);
    assert_eq!(item.remote_field().unwrap().crop_field_id, "R1");
}

#[test]
fn empty_source_id_is_not_an_identifier() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_id_source = Some(String::new());
    let mut r = remote("", square(50.0, 50.0, 10.0));
    r.crop_field_id = String::new();
    let items = run(&[l], &[r]);
    let statuses: Vec<_> = items.iter().map(ReviewItem::status).collect();
    assert_eq!(statuses, vec![ReviewStatus::NewRemote, ReviewStatus::ExpiredLocal]);
    assert_eq!(items[0].item_id(), "unknown");
}

#[test]
fn best_overlap_wins_among_candidates() {
    let near = local("near", square(0.02, 0.0, 10.0));
    let exact = local("exact", square(0.0, 0.0, 10.0));
    let items = run(&[near, exact], &[remote("R1", square(0.0, 0.0, 10.0))]);
    assert_eq!(items[0].item_id(), "exact");
    assert_eq!(items[1].item_id(), "near");
}

#[test]
fn greedy_assignment_follows_remote_input_order() {
    // R2 fits A exactly, but R1 comes first and claims A; R2 settles for B.
    let a = local("A", square(0.0, 0.0, 10.0));
    let b = local("B", square(0.03, 0.0, 10.0));
    let r1 = remote("R1", square(0.01, 0.0, 10.0));
    let r2 = remote("R2", square(0.0, 0.0, 10.0));
    let items = run(&[a, b], &[r1, r2]);

    let pairs: Vec<(&str, Option<&str>)> = items
        .iter()
        .map(|item| {
            (
                item.item_id(),
                item.remote_field().map(|r| r.crop_field_id.as_str()),
            )
        })
        .collect();
    assert_eq!(pairs, vec![("A", Some("R1")), ("B", Some("R2"))]);
}

#[test]
fn output_order_is_identifier_then_spatial_then_orphans() {
    let mut by_id = local("by-id", square(100.0, 0.0, 10.0));
    by_id.b_id_source = Some("R-id".to_string());
    let spatial = local("spatial", square(0.0, 0.0, 10.0));
    let orphan = local("orphan", square(900.0, 0.0, 10.0));

    let items = run(
        &[orphan, spatial, by_id],
        &[
            remote("R-new", square(500.0, 0.0, 10.0)),
            remote("R-spatial", square(0.0, 0.0, 10.0)),
            remote("R-id", square(100.0, 0.0, 10.0)),
        ],
    );
    let ids: Vec<&str> = items.iter().map(ReviewItem::item_id).collect();
    assert_eq!(ids, vec!["by-id", "R-new", "spatial", "orphan"]);
}

#[test]
fn custom_threshold_from_config() {
    let mut config = fieldsync_core::FieldSyncConfig::default();
    config.matching.spatial_match_threshold = 0.5;
    let matcher = FieldMatcher::from_config(&config);
    let items = matcher.match_fields(
        &[local("f-1", square(0.0, 0.0, 10.0))],
        &[remote("R1", square(2.0, 0.0, 10.0))],
        year(2025),
        None,
    );
    let item = single(items);
    assert_eq!(item.status(), ReviewStatus::Conflict);
    assert_eq!(item.diffs(), &[FieldDiff::Geometry]);
}

#[test]
fn degenerate_geometry_never_matches_spatially() {
    let broken = FieldGeometry::Polygon(polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 0.0, y: 0.0),
    ]);
    let items = run(&[local("f-1", broken)], &[remote("R1", square(0.0, 0.0, 10.0))]);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].status(), ReviewStatus::NewRemote);
}

// ---------------------------------------------------------------------------
// Cultivations and orphans
// ---------------------------------------------------------------------------

#[test]
fn active_cultivation_is_independent_of_history_order() {
    let old = Cultivation {
        b_lu: "lu-old".to_string(),
        b_lu_catalogue: "nl_259".to_string(),
        b_lu_name: "Mais, snij-".to_string(),
        b_lu_start: date(2024, 4, 1),
        b_lu_end: Some(date(2024, 10, 1)),
    };
    let current = Cultivation {
        b_lu: "lu-current".to_string(),
        b_lu_catalogue: "nl_265".to_string(),
        b_lu_name: "Grasland, blijvend".to_string(),
        b_lu_start: date(2025, 1, 1),
        b_lu_end: None,
    };

    for history in [vec![old.clone(), current.clone()], vec![current, old]] {
        let mut l = local("f-1", square(0.0, 0.0, 10.0));
        l.cultivations = history;
        let item = single(run(&[l], &[remote("R1", square(0.0, 0.0, 10.0))]));
        assert_eq!(item.status(), ReviewStatus::Match);
        assert_eq!(
            item.local_cultivation().and_then(|c| c.b_lu.as_deref()),
            Some("lu-current")
        );
    }
}

#[test]
fn orphan_starting_in_the_year_is_new_local() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_start = date(2025, 1, 1);
    assert_eq!(single(run(&[l], &[])).status(), ReviewStatus::NewLocal);
}

#[test]
fn orphan_ending_on_new_year_is_expired() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_start = date(2019, 1, 1);
    l.b_end = Some(date(2025, 1, 1));
    assert_eq!(single(run(&[l], &[])).status(), ReviewStatus::ExpiredLocal);
}

#[test]
fn orphan_closed_before_the_year_is_new_local() {
    let mut l = local("f-1", square(0.0, 0.0, 10.0));
    l.b_start = date(2015, 1, 1);
    l.b_end = Some(date(2019, 12, 31));
    assert_eq!(single(run(&[l], &[])).status(), ReviewStatus::NewLocal);
}

#[test]
fn empty_inputs_produce_no_items() {
    assert!(run(&[], &[]).is_empty());
}

/// Delegates areas to `GeoEngine` but rejects every bounding-box pair.
#[derive(Default)]
struct DisjointBoxes {
    bbox_checks: Arc<AtomicUsize>,
}

impl IGeometryEngine for DisjointBoxes {
    fn bbox_overlap(&self, _a: &BoundingBox, _b: &BoundingBox) -> bool {
        self.bbox_checks.fetch_add(1, Ordering::SeqCst);
        false
    }

    fn intersection_area(
        &self,
        a: &FieldGeometry,
        b: &FieldGeometry,
    ) -> Result<f64, GeometryError> {
        GeoEngine.intersection_area(a, b)
    }

    fn union_area(&self, a: &FieldGeometry, b: &FieldGeometry) -> Result<f64, GeometryError> {
        GeoEngine.union_area(a, b)
    }

    fn name(&self) -> &str {
        "disjoint-boxes"
    }
}

#[test]
fn spatial_prefilter_goes_through_the_engine() {
    let engine = DisjointBoxes::default();
    let checks = Arc::clone(&engine.bbox_checks);
    let items = FieldMatcher::new(Box::new(engine)).match_fields(
        &[
            local("f-1", square(0.0, 0.0, 10.0)),
            local("f-2", square(50.0, 0.0, 10.0)),
        ],
        &[remote("R1", square(0.0, 0.0, 10.0))],
        year(2025),
        None,
    );

    let statuses: Vec<ReviewStatus> = items.iter().map(ReviewItem::status).collect();
    assert_eq!(
        statuses,
        vec![
            ReviewStatus::NewRemote,
            ReviewStatus::ExpiredLocal,
            ReviewStatus::ExpiredLocal,
        ]
    );
    assert_eq!(checks.load(Ordering::SeqCst), 2);
}
