//! Geometry errors. Non-fatal during matching: they degrade IoU to 0.

use super::error_code::{self, FieldSyncErrorCode};

/// Errors raised while validating or combining field geometries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {reason}")]
    Degenerate { reason: String },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("{operation} failed inside the geometry engine")]
    BooleanOpFailed { operation: &'static str },

    #[error("unsupported geometry type {found}, expected Polygon or MultiPolygon")]
    UnsupportedGeometry { found: String },

    #[error("invalid GeoJSON geometry: {message}")]
    InvalidGeoJson { message: String },
}

impl FieldSyncErrorCode for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedGeometry { .. } => error_code::UNSUPPORTED_GEOMETRY,
            _ => error_code::GEOMETRY_ERROR,
        }
    }
}
