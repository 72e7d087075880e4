//! # fieldsync-matching
//!
//! Reconciles a farm's local fields against a registry snapshot for one year.
//!
//! Pipeline: identifier match → spatial match → orphan classification.
//! Every local and every remote field ends up in exactly one `ReviewItem`.

pub mod cultivation;
pub mod diff;
pub mod matcher;
pub mod orphan;

pub use cultivation::find_active_cultivation;
pub use diff::{crop_code_differs, detect_diffs};
pub use matcher::FieldMatcher;
pub use orphan::{classify_orphan, OrphanKind};
