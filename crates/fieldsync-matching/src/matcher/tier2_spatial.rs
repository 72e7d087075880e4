//! Tier 2: pair the remaining remote fields with local fields by overlap.

use fieldsync_core::models::{FieldDiff, LocalField, RemoteField, RemoteOnly, ReviewItem};
use fieldsync_geometry::calculate_iou;
use tracing::debug;

use super::{MatchState, Pass};

pub(super) fn run(
    pass: &Pass<'_>,
    locals: &[LocalField],
    remotes: &[RemoteField],
    state: &mut MatchState,
    items: &mut Vec<ReviewItem>,
) {
    for (ri, remote) in remotes.iter().enumerate() {
        if state.remote_consumed[ri] {
            continue;
        }

        let best = best_candidate(pass, locals, remote, state);
        match best {
            Some((li, iou)) if iou > pass.matching.spatial_match_threshold => {
                state.consume(li, ri);
                let item = pass.compare(&locals[li], remote);
                debug!(
                    local = %locals[li].b_id,
                    remote = %remote.crop_field_id,
                    iou,
                    status = ?item.status(),
                    diffs = ?item.diffs().iter().map(FieldDiff::key).collect::<Vec<_>>(),
                    "spatial match"
                );
                items.push(item);
            }
            _ => {
                state.remote_consumed[ri] = true;
                debug!(
                    remote = %remote.crop_field_id,
                    best_iou = best.map_or(0.0, |(_, iou)| iou),
                    "no local counterpart"
                );
                items.push(ReviewItem::NewRemote(RemoteOnly {
                    rvo_field: remote.clone(),
                    rvo_cultivation: pass.remote_cultivation(remote),
                }));
            }
        }
    }
}

/// Unconsumed local field with the strictly greatest IoU against `remote`.
/// Ties keep the earlier local field.
fn best_candidate(
    pass: &Pass<'_>,
    locals: &[LocalField],
    remote: &RemoteField,
    state: &MatchState,
) -> Option<(usize, f64)> {
    let remote_bbox = remote.geometry.bounding_box()?;
    let mut best: Option<(usize, f64)> = None;

    for (li, local) in locals.iter().enumerate() {
        if state.local_consumed[li] {
            continue;
        }
        let Some(local_bbox) = local.b_geometry.bounding_box() else {
            continue;
        };
        if !pass.engine.bbox_overlap(&local_bbox, &remote_bbox) {
            continue;
        }
        let iou = calculate_iou(pass.engine, &local.b_geometry, &remote.geometry);
        if best.map_or(true, |(_, best_iou)| iou > best_iou) {
            best = Some((li, iou));
        }
    }
    best
}
