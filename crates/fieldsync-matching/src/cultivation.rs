//! Active-cultivation resolution.

use chrono::{DateTime, Utc};
use fieldsync_core::models::Cultivation;

/// The cultivation whose `[b_lu_start, b_lu_end)` window contains `reference`.
/// When several qualify, the first in input order wins.
pub fn find_active_cultivation(
    cultivations: &[Cultivation],
    reference: DateTime<Utc>,
) -> Option<&Cultivation> {
    cultivations.iter().find(|c| c.is_active_on(reference))
}
