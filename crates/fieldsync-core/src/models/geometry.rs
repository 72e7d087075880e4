//! Field geometry: a validated Polygon/MultiPolygon, never an untyped blob.

use geo::{BoundingRect, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle overlap test. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

/// The geometry of a field parcel.
///
/// (De)serializes as a GeoJSON geometry object; anything other than a
/// Polygon or MultiPolygon is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "geojson::Geometry", into = "geojson::Geometry")]
pub enum FieldGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl FieldGeometry {
    /// Both variants as a MultiPolygon, the common input of boolean operations.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            FieldGeometry::Polygon(poly) => MultiPolygon::new(vec![poly.clone()]),
            FieldGeometry::MultiPolygon(multi) => multi.clone(),
        }
    }

    /// Returns None for empty geometries.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let rect = match self {
            FieldGeometry::Polygon(poly) => poly.bounding_rect(),
            FieldGeometry::MultiPolygon(multi) => multi.bounding_rect(),
        }?;
        Some(BoundingBox::new(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
        ))
    }

    /// GeoJSON type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldGeometry::Polygon(_) => "Polygon",
            FieldGeometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

impl From<Polygon<f64>> for FieldGeometry {
    fn from(poly: Polygon<f64>) -> Self {
        FieldGeometry::Polygon(poly)
    }
}

impl From<MultiPolygon<f64>> for FieldGeometry {
    fn from(multi: MultiPolygon<f64>) -> Self {
        FieldGeometry::MultiPolygon(multi)
    }
}

impl TryFrom<geojson::Geometry> for FieldGeometry {
    type Error = GeometryError;

    fn try_from(geometry: geojson::Geometry) -> Result<Self, Self::Error> {
        let invalid = |e: geojson::Error| GeometryError::InvalidGeoJson {
            message: e.to_string(),
        };
        match geometry.value {
            value @ geojson::Value::Polygon(_) => {
                let poly: Polygon<f64> = value.try_into().map_err(invalid)?;
                Ok(FieldGeometry::Polygon(poly))
            }
            value @ geojson::Value::MultiPolygon(_) => {
                let multi: MultiPolygon<f64> = value.try_into().map_err(invalid)?;
                Ok(FieldGeometry::MultiPolygon(multi))
            }
            other => Err(GeometryError::UnsupportedGeometry {
                found: other.type_name().to_string(),
            }),
        }
    }
}

impl From<FieldGeometry> for geojson::Geometry {
    fn from(geometry: FieldGeometry) -> Self {
        let value = match &geometry {
            FieldGeometry::Polygon(poly) => geojson::Value::from(poly),
            FieldGeometry::MultiPolygon(multi) => geojson::Value::from(multi),
        };
        geojson::Geometry::new(value)
    }
}
