//! ActionProcessor: applies one operator choice per review item.

use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::config::ImportConfig;
use fieldsync_core::errors::FieldSyncResult;
use fieldsync_core::models::{
    CultivationSummary, LocalField, RemoteField, ReviewItem, ReviewStatus, UserAction,
    UserChoiceMap,
};
use fieldsync_core::traits::IFieldStore;
use tracing::{debug, info, Instrument};

use crate::records;

/// Observer called with the new field id after each successful `ADD_REMOTE`.
pub type FieldAddedCallback = Box<dyn Fn(&str, &RemoteField) + Send + Sync>;

enum Outcome {
    Applied,
    Skipped(&'static str),
}

/// Applies operator choices for one farm and one review year.
///
/// Persistence calls are awaited strictly in sequence. There is no rollback:
/// when a call fails, the effects of earlier items stay committed and the
/// error is returned to the caller.
pub struct ActionProcessor<'a, S: IFieldStore> {
    store: &'a S,
    farm_id: String,
    year: ReviewYear,
    import: ImportConfig,
    on_field_added: Option<FieldAddedCallback>,
}

impl<'a, S: IFieldStore> ActionProcessor<'a, S> {
    pub fn new(store: &'a S, farm_id: impl Into<String>, year: ReviewYear) -> Self {
        Self {
            store,
            farm_id: farm_id.into(),
            year,
            import: ImportConfig::default(),
            on_field_added: None,
        }
    }

    pub fn with_import_config(mut self, import: ImportConfig) -> Self {
        self.import = import;
        self
    }

    pub fn on_field_added<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &RemoteField) + Send + Sync + 'static,
    {
        self.on_field_added = Some(Box::new(callback));
        self
    }

    /// Apply the chosen action for every item, in item order.
    ///
    /// Items without a choice, or with `IGNORE`/`NO_ACTION`, are skipped, as
    /// are actions whose item lacks the field they act on.
    pub async fn process(
        &self,
        items: &[ReviewItem],
        choices: &UserChoiceMap,
    ) -> FieldSyncResult<()> {
        let span = fieldsync_core::import_span!(self.farm_id, self.year, items.len());
        async {
            let mut applied = 0usize;
            let mut skipped = 0usize;
            for item in items {
                let id = item.item_id();
                let action = choices.get(id).copied().unwrap_or(UserAction::NoAction);
                match self.apply(item, action).await? {
                    Outcome::Applied => {
                        applied += 1;
                        debug!(item = id, ?action, "action applied");
                    }
                    Outcome::Skipped(reason) => {
                        skipped += 1;
                        debug!(item = id, ?action, reason, "action skipped");
                    }
                }
            }
            info!(applied, skipped, "import pass complete");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn apply(&self, item: &ReviewItem, action: UserAction) -> FieldSyncResult<Outcome> {
        match action {
            UserAction::Ignore | UserAction::NoAction => Ok(Outcome::Skipped("no-op choice")),
            UserAction::AddRemote => match item.remote_field() {
                Some(remote) => self.add_remote(remote).await,
                None => Ok(Outcome::Skipped("no registry field")),
            },
            UserAction::UpdateFromRemote => match (item.local_field(), item.remote_field()) {
                (Some(local), Some(remote)) => {
                    self.update_from_remote(local, remote, item.local_cultivation())
                        .await
                }
                _ => Ok(Outcome::Skipped("needs both a local and a registry field")),
            },
            UserAction::KeepLocal if item.status() != ReviewStatus::Conflict => {
                Ok(Outcome::Skipped("keep-local outside a conflict"))
            }
            UserAction::KeepLocal | UserAction::RemoveLocal => match item.local_field() {
                Some(local) => {
                    self.store.remove_field(&local.b_id).await?;
                    Ok(Outcome::Applied)
                }
                None => Ok(Outcome::Skipped("no local field")),
            },
            UserAction::CloseLocal => match item.local_field() {
                Some(local) => {
                    let record = records::closed(local, self.year.end_of_previous_year());
                    self.store.update_field(&local.b_id, &record).await?;
                    Ok(Outcome::Applied)
                }
                None => Ok(Outcome::Skipped("no local field")),
            },
        }
    }

    async fn add_remote(&self, remote: &RemoteField) -> FieldSyncResult<Outcome> {
        let record = records::from_remote(remote, &self.import);
        let field_id = self.store.add_field(&self.farm_id, &record).await?;

        if let Some(code) = remote.crop_type_code() {
            let crop_code = self.import.catalogue_code(code);
            self.add_default_cultivation(&crop_code, &field_id).await?;
        }

        if let Some(callback) = &self.on_field_added {
            callback(&field_id, remote);
        }
        Ok(Outcome::Applied)
    }

    async fn update_from_remote(
        &self,
        local: &LocalField,
        remote: &RemoteField,
        local_cultivation: Option<&CultivationSummary>,
    ) -> FieldSyncResult<Outcome> {
        let record = records::replaced_by_remote(local, remote, &self.import);
        self.store.update_field(&local.b_id, &record).await?;

        let remote_code = remote
            .crop_type_code()
            .map(|code| self.import.catalogue_code(code));
        let local_code = local_cultivation.map(|c| c.b_lu_catalogue.as_str());
        if local_code == remote_code.as_deref() {
            return Ok(Outcome::Applied);
        }

        if let Some(old) = local_cultivation.and_then(|c| c.b_lu.as_deref()) {
            self.store.remove_cultivation(old).await?;
        }
        if let Some(crop_code) = remote_code {
            self.add_default_cultivation(&crop_code, &local.b_id).await?;
        }
        Ok(Outcome::Applied)
    }

    async fn add_default_cultivation(
        &self,
        crop_code: &str,
        field_id: &str,
    ) -> FieldSyncResult<()> {
        let dates = self
            .store
            .get_default_dates_of_cultivation(crop_code, self.year.year())
            .await?;
        self.store
            .add_cultivation(crop_code, field_id, dates.start, dates.end)
            .await?;
        Ok(())
    }
}
