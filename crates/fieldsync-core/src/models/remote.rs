use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geometry::FieldGeometry;

/// A field record from the registry snapshot. Immutable input, already
/// schema-validated by the registry client; keys keep the registry's names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteField {
    #[serde(rename = "CropFieldID")]
    pub crop_field_id: String,
    #[serde(default)]
    pub crop_field_version: Option<String>,
    /// Registry-side field name.
    #[serde(default)]
    pub crop_field_designator: Option<String>,
    pub begin_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub crop_type_code: Option<String>,
    #[serde(default)]
    pub use_title_code: Option<String>,
    #[serde(rename = "geometry")]
    pub geometry: FieldGeometry,
}

impl RemoteField {
    /// The designator, when present and non-empty.
    pub fn designator(&self) -> Option<&str> {
        self.crop_field_designator
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// The crop type code, when present and non-empty.
    pub fn crop_type_code(&self) -> Option<&str> {
        self.crop_type_code.as_deref().filter(|code| !code.is_empty())
    }
}
