//! Collaborator seams: the geometry capability and the persistence layer.

pub mod field_store;
pub mod geometry_engine;

pub use field_store::{CultivationDates, FieldRecord, IFieldStore};
pub use geometry_engine::IGeometryEngine;
