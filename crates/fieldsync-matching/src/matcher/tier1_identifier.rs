//! Tier 1: pair local fields with the remote field they were sourced from.

use fieldsync_core::models::{LocalField, RemoteField, ReviewItem};
use tracing::debug;

use super::{MatchState, Pass};

pub(super) fn run(
    pass: &Pass<'_>,
    locals: &[LocalField],
    remotes: &[RemoteField],
    state: &mut MatchState,
    items: &mut Vec<ReviewItem>,
) {
    for (li, local) in locals.iter().enumerate() {
        let Some(source_id) = local.source_id() else {
            continue;
        };
        let hit = remotes
            .iter()
            .enumerate()
            .find(|(ri, remote)| !state.remote_consumed[*ri] && remote.crop_field_id == source_id);

        if let Some((ri, remote)) = hit {
            state.consume(li, ri);
            let item = pass.compare(local, remote);
            debug!(
                local = %local.b_id,
                remote = %remote.crop_field_id,
                status = ?item.status(),
                "identifier match"
            );
            items.push(item);
        }
    }
}
