//! FieldMatcher: identifier tier, spatial tier, then the orphan pass.

mod orphan_pass;
mod tier1_identifier;
mod tier2_spatial;

use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::config::{FieldSyncConfig, ImportConfig, MatchingConfig};
use fieldsync_core::models::{
    CultivationCatalogue, CultivationSummary, FieldDiff, LocalField, MatchedPair, RemoteField,
    ReviewItem, ReviewSummary,
};
use fieldsync_core::traits::IGeometryEngine;
use fieldsync_geometry::GeoEngine;
use tracing::info;

use crate::cultivation::find_active_cultivation;
use crate::diff::{crop_code_differs, detect_diffs};

/// Reconciles local fields against a registry snapshot.
///
/// Stateless between calls: the consumed markers of a pass live on the
/// stack of [`FieldMatcher::match_fields`].
pub struct FieldMatcher {
    engine: Box<dyn IGeometryEngine>,
    matching: MatchingConfig,
    import: ImportConfig,
}

impl FieldMatcher {
    /// Matcher with default thresholds and import settings.
    pub fn new(engine: Box<dyn IGeometryEngine>) -> Self {
        Self::with_config(engine, MatchingConfig::default(), ImportConfig::default())
    }

    pub fn with_config(
        engine: Box<dyn IGeometryEngine>,
        matching: MatchingConfig,
        import: ImportConfig,
    ) -> Self {
        Self {
            engine,
            matching,
            import,
        }
    }

    /// Matcher backed by [`GeoEngine`], configured from a resolved config.
    pub fn from_config(config: &FieldSyncConfig) -> Self {
        Self::with_config(
            Box::new(GeoEngine::new()),
            config.matching.clone(),
            config.import.clone(),
        )
    }

    /// Classify every local and remote field into exactly one review item.
    ///
    /// Output order: identifier matches, then spatial matches and new remote
    /// fields in remote input order, then orphaned local fields.
    ///
    /// Spatial matching is greedy per remote field: a remote claims the best
    /// unclaimed local field even when a later remote would have fit it
    /// better.
    pub fn match_fields(
        &self,
        locals: &[LocalField],
        remotes: &[RemoteField],
        year: ReviewYear,
        catalogue: Option<&CultivationCatalogue>,
    ) -> Vec<ReviewItem> {
        let span = fieldsync_core::matching_span!(year, locals.len(), remotes.len());
        let _entered = span.enter();

        let pass = Pass {
            engine: self.engine.as_ref(),
            matching: &self.matching,
            import: &self.import,
            year: &year,
            catalogue,
        };
        let mut state = MatchState::new(locals.len(), remotes.len());
        let mut items = Vec::with_capacity(locals.len() + remotes.len());

        tier1_identifier::run(&pass, locals, remotes, &mut state, &mut items);
        tier2_spatial::run(&pass, locals, remotes, &mut state, &mut items);
        orphan_pass::run(&pass, locals, &state, &mut items);

        let summary = ReviewSummary::from_items(&items);
        info!(
            matched = summary.matched,
            conflicts = summary.conflicts,
            new_remote = summary.new_remote,
            new_local = summary.new_local,
            expired_local = summary.expired_local,
            "matching pass complete"
        );
        items
    }
}

/// Borrowed inputs shared by the tiers of one pass.
struct Pass<'a> {
    engine: &'a dyn IGeometryEngine,
    matching: &'a MatchingConfig,
    import: &'a ImportConfig,
    year: &'a ReviewYear,
    catalogue: Option<&'a CultivationCatalogue>,
}

impl Pass<'_> {
    fn local_cultivation(&self, local: &LocalField) -> Option<CultivationSummary> {
        find_active_cultivation(&local.cultivations, self.year.reference_date())
            .map(CultivationSummary::from)
    }

    /// Catalogue-resolved summary of the remote crop, named after the code
    /// itself when the catalogue has no entry.
    fn remote_cultivation(&self, remote: &RemoteField) -> Option<CultivationSummary> {
        let code = self.import.catalogue_code(remote.crop_type_code()?);
        let name = self
            .catalogue
            .and_then(|catalogue| catalogue.name_for(&code))
            .map(str::to_string)
            .unwrap_or_else(|| code.clone());
        Some(CultivationSummary {
            b_lu: None,
            b_lu_catalogue: code,
            b_lu_name: name,
        })
    }

    /// MATCH or CONFLICT item for a paired local/remote field.
    fn compare(&self, local: &LocalField, remote: &RemoteField) -> ReviewItem {
        let local_cultivation = self.local_cultivation(local);
        let rvo_cultivation = self.remote_cultivation(remote);

        let mut diffs = detect_diffs(
            self.engine,
            local,
            remote,
            self.matching.geometry_diff_threshold,
        );
        if crop_code_differs(
            local_cultivation
                .as_ref()
                .map(|c| c.b_lu_catalogue.as_str()),
            rvo_cultivation.as_ref().map(|c| c.b_lu_catalogue.as_str()),
        ) {
            diffs.push(FieldDiff::CropCode);
        }

        ReviewItem::compared(MatchedPair {
            local_field: local.clone(),
            rvo_field: remote.clone(),
            local_cultivation,
            rvo_cultivation,
            diffs,
        })
    }
}

/// Consumed markers, by input index.
struct MatchState {
    local_consumed: Vec<bool>,
    remote_consumed: Vec<bool>,
}

impl MatchState {
    fn new(local_count: usize, remote_count: usize) -> Self {
        Self {
            local_consumed: vec![false; local_count],
            remote_consumed: vec![false; remote_count],
        }
    }

    fn consume(&mut self, local: usize, remote: usize) {
        self.local_consumed[local] = true;
        self.remote_consumed[remote] = true;
    }
}
