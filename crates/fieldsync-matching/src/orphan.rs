//! Classification of local fields left unmatched after both tiers.

use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::models::{LocalField, ReviewStatus};

/// What an unmatched local field is to the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanKind {
    New,
    Expired,
}

impl From<OrphanKind> for ReviewStatus {
    fn from(kind: OrphanKind) -> Self {
        match kind {
            OrphanKind::New => ReviewStatus::NewLocal,
            OrphanKind::Expired => ReviewStatus::ExpiredLocal,
        }
    }
}

/// New or expired, for an unmatched local field.
///
/// A field starting in or after the review year is new. One that started
/// before it and is still open on January 1 is expired: the registry no
/// longer knows it. A field whose whole window lies before the year is also
/// reported as new.
pub fn classify_orphan(field: &LocalField, year: &ReviewYear) -> OrphanKind {
    let year_start = year.start_of_year();
    if field.b_start >= year_start {
        return OrphanKind::New;
    }
    match field.b_end {
        None => OrphanKind::Expired,
        Some(end) if end >= year_start => OrphanKind::Expired,
        Some(_) => OrphanKind::New,
    }
}
