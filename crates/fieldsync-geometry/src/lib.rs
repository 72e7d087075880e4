//! # fieldsync-geometry
//!
//! Overlap measures between field parcels:
//! - [`bbox_overlap`]: cheap axis-aligned rejection filter
//! - [`calculate_iou`]: Intersection-over-Union in `[0, 1]`, degrading to 0 on bad input
//! - [`GeoEngine`]: `IGeometryEngine` implementation on top of the `geo` crate

pub mod engine;
pub mod iou;

pub use engine::GeoEngine;
pub use iou::{bbox_overlap, calculate_iou};
