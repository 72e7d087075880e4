use crate::errors::GeometryError;
use crate::models::{BoundingBox, FieldGeometry};

/// Narrow polygon capability the matcher needs. Any computational-geometry
/// library can back it without touching matching logic.
pub trait IGeometryEngine: Send + Sync {
    /// Cheap rejection filter ahead of area computations.
    fn bbox_overlap(&self, a: &BoundingBox, b: &BoundingBox) -> bool {
        a.overlaps(b)
    }

    /// Area of `a ∩ b`.
    fn intersection_area(&self, a: &FieldGeometry, b: &FieldGeometry)
        -> Result<f64, GeometryError>;

    /// Area of `a ∪ b`.
    fn union_area(&self, a: &FieldGeometry, b: &FieldGeometry) -> Result<f64, GeometryError>;

    /// Engine name, for diagnostics.
    fn name(&self) -> &str;
}
