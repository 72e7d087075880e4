//! Domain models shared by matching and import.

pub mod catalogue;
pub mod choice;
pub mod field;
pub mod geometry;
pub mod remote;
pub mod review;

pub use catalogue::{CultivationCatalogue, CultivationCatalogueEntry};
pub use choice::{UserAction, UserChoiceMap};
pub use field::{Cultivation, LocalField};
pub use geometry::{BoundingBox, FieldGeometry};
pub use remote::RemoteField;
pub use review::{
    CultivationSummary, FieldDiff, LocalOnly, MatchedPair, RemoteOnly, ReviewItem, ReviewStatus,
    ReviewSummary,
};
