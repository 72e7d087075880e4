//! IFieldStore: the persistence collaborator the import pass writes through.

use chrono::{DateTime, Utc};

use crate::errors::FieldSyncResult;
use crate::models::FieldGeometry;

/// Field attributes written by `add_field` / `update_field`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    pub name: String,
    pub source_id: Option<String>,
    pub geometry: FieldGeometry,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub acquiring_method: String,
}

/// Default cultivation window for a crop code in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultivationDates {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// Persistence operations for fields and cultivations.
///
/// Every call is awaited one at a time by the import pass. Implementations
/// that need all-or-nothing semantics wrap the whole batch in their own
/// transaction scope; the import pass does not roll back.
#[allow(async_fn_in_trait)]
pub trait IFieldStore: Send + Sync {
    /// Create a field on a farm, returning the new field id.
    async fn add_field(&self, farm_id: &str, field: &FieldRecord) -> FieldSyncResult<String>;

    /// Overwrite a field's attributes.
    async fn update_field(&self, field_id: &str, field: &FieldRecord) -> FieldSyncResult<()>;

    /// Delete a field and everything attached to it.
    async fn remove_field(&self, field_id: &str) -> FieldSyncResult<()>;

    /// Create a cultivation on a field, returning the new cultivation id.
    async fn add_cultivation(
        &self,
        crop_code: &str,
        field_id: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> FieldSyncResult<String>;

    /// Delete a cultivation instance.
    async fn remove_cultivation(&self, cultivation_id: &str) -> FieldSyncResult<()>;

    /// Default sowing/harvest window for a crop code in a year.
    async fn get_default_dates_of_cultivation(
        &self,
        crop_code: &str,
        year: i32,
    ) -> FieldSyncResult<CultivationDates>;
}
