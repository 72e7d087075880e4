//! Bounding-box pre-filter and Intersection-over-Union between two field geometries.

use fieldsync_core::models::{BoundingBox, FieldGeometry};
use fieldsync_core::traits::IGeometryEngine;

/// Axis-aligned rectangle overlap test. Touching edges count as overlapping.
pub fn bbox_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}

/// IoU of two geometries, in `[0, 1]`.
///
/// Returns 0.0 when either geometry is invalid, the engine fails, or the
/// union is empty. Engine failures are logged at `warn`, never returned.
pub fn calculate_iou(engine: &dyn IGeometryEngine, a: &FieldGeometry, b: &FieldGeometry) -> f64 {
    let areas = engine
        .intersection_area(a, b)
        .and_then(|intersection| Ok((intersection, engine.union_area(a, b)?)));

    match areas {
        Ok((intersection, union)) => {
            if union <= 0.0 {
                return 0.0;
            }
            (intersection / union).clamp(0.0, 1.0)
        }
        Err(err) => {
            tracing::warn!(
                engine = engine.name(),
                error = %err,
                "geometry overlap failed, treating IoU as 0"
            );
            0.0
        }
    }
}
