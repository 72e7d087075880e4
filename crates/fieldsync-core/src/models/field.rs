use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geometry::FieldGeometry;

/// A field parcel held by the farm, with its cultivation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalField {
    /// Owned identifier.
    pub b_id: String,
    /// Identifier of the registry field this one was previously matched to.
    #[serde(default)]
    pub b_id_source: Option<String>,
    pub b_name: String,
    pub b_geometry: FieldGeometry,
    pub b_start: DateTime<Utc>,
    /// Open-ended when absent.
    #[serde(default)]
    pub b_end: Option<DateTime<Utc>>,
    pub b_acquiring_method: String,
    #[serde(default)]
    pub cultivations: Vec<Cultivation>,
}

impl LocalField {
    /// The previously-matched registry id, when set and non-empty.
    pub fn source_id(&self) -> Option<&str> {
        self.b_id_source.as_deref().filter(|id| !id.is_empty())
    }
}

/// One crop-planting record on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cultivation {
    /// Instance id.
    pub b_lu: String,
    /// Crop code, e.g. `nl_265`.
    pub b_lu_catalogue: String,
    pub b_lu_name: String,
    pub b_lu_start: DateTime<Utc>,
    #[serde(default)]
    pub b_lu_end: Option<DateTime<Utc>>,
}

impl Cultivation {
    /// Whether `date` falls in `[b_lu_start, b_lu_end)`, open-ended without an end.
    pub fn is_active_on(&self, date: DateTime<Utc>) -> bool {
        self.b_lu_start <= date && self.b_lu_end.map_or(true, |end| date < end)
    }
}
