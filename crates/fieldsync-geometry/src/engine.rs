//! GeoEngine: intersection/union areas via `geo` boolean operations.

use std::panic::{self, AssertUnwindSafe};

use fieldsync_core::errors::GeometryError;
use fieldsync_core::models::FieldGeometry;
use fieldsync_core::traits::IGeometryEngine;
use geo::{Area, BooleanOps, MultiPolygon};

#[derive(Debug, Clone, Copy)]
enum BooleanOp {
    Intersection,
    Union,
}

impl BooleanOp {
    fn name(self) -> &'static str {
        match self {
            BooleanOp::Intersection => "intersection",
            BooleanOp::Union => "union",
        }
    }
}

/// Planar geometry engine backed by `geo`.
///
/// Areas are computed in the coordinate units of the input, so callers must
/// feed projected (metric) coordinates for areas to mean anything. IoU is a
/// ratio and stays meaningful either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEngine;

impl GeoEngine {
    pub fn new() -> Self {
        Self
    }

    fn boolean_area(
        &self,
        op: BooleanOp,
        a: &FieldGeometry,
        b: &FieldGeometry,
    ) -> Result<f64, GeometryError> {
        let a = validated(a)?;
        let b = validated(b)?;

        // geo's sweep-line boolean ops panic on some self-intersecting input.
        let area = panic::catch_unwind(AssertUnwindSafe(|| match op {
            BooleanOp::Intersection => a.intersection(&b).unsigned_area(),
            BooleanOp::Union => a.union(&b).unsigned_area(),
        }))
        .map_err(|_| GeometryError::BooleanOpFailed {
            operation: op.name(),
        })?;

        if area.is_finite() {
            Ok(area)
        } else {
            Err(GeometryError::Degenerate {
                reason: format!("{} area is not finite", op.name()),
            })
        }
    }
}

impl IGeometryEngine for GeoEngine {
    fn intersection_area(
        &self,
        a: &FieldGeometry,
        b: &FieldGeometry,
    ) -> Result<f64, GeometryError> {
        self.boolean_area(BooleanOp::Intersection, a, b)
    }

    fn union_area(&self, a: &FieldGeometry, b: &FieldGeometry) -> Result<f64, GeometryError> {
        self.boolean_area(BooleanOp::Union, a, b)
    }

    fn name(&self) -> &str {
        "geo"
    }
}

/// Reject empty polygons, open/short rings and non-finite coordinates.
fn validated(geometry: &FieldGeometry) -> Result<MultiPolygon<f64>, GeometryError> {
    let multi = geometry.to_multi_polygon();
    if multi.0.is_empty() {
        return Err(GeometryError::Degenerate {
            reason: format!("empty {}", geometry.type_name()),
        });
    }
    for polygon in &multi.0 {
        // A closed ring around a non-zero area needs 3 distinct vertices + the closing one.
        if polygon.exterior().0.len() < 4 {
            return Err(GeometryError::Degenerate {
                reason: format!(
                    "exterior ring has {} coordinates",
                    polygon.exterior().0.len()
                ),
            });
        }
        let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
        for coord in rings.flat_map(|ring| ring.0.iter()) {
            if !coord.x.is_finite() || !coord.y.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate {
                    x: coord.x,
                    y: coord.y,
                });
            }
        }
    }
    Ok(multi)
}
