//! # fieldsync-core
//!
//! Foundation crate for field parcel reconciliation.
//! Defines the field and review models, collaborator traits, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use calendar::ReviewYear;
pub use config::FieldSyncConfig;
pub use errors::{FieldSyncError, FieldSyncResult};
pub use models::{
    BoundingBox, Cultivation, CultivationCatalogue, FieldDiff, FieldGeometry, LocalField,
    RemoteField, ReviewItem, ReviewStatus, UserAction, UserChoiceMap,
};
