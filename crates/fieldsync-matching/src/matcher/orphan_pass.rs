//! Orphan pass: classify local fields neither tier consumed.

use fieldsync_core::models::{LocalField, LocalOnly, ReviewItem};
use tracing::debug;

use super::{MatchState, Pass};
use crate::orphan::{classify_orphan, OrphanKind};

pub(super) fn run(
    pass: &Pass<'_>,
    locals: &[LocalField],
    state: &MatchState,
    items: &mut Vec<ReviewItem>,
) {
    let orphans = locals
        .iter()
        .enumerate()
        .filter(|(li, _)| !state.local_consumed[*li])
        .map(|(_, local)| local);

    for local in orphans {
        let kind = classify_orphan(local, pass.year);
        debug!(local = %local.b_id, ?kind, "unmatched local field");
        let orphan = LocalOnly {
            local_field: local.clone(),
            local_cultivation: pass.local_cultivation(local),
        };
        items.push(match kind {
            OrphanKind::New => ReviewItem::NewLocal(orphan),
            OrphanKind::Expired => ReviewItem::ExpiredLocal(orphan),
        });
    }
}
