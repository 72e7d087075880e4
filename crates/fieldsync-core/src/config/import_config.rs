use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::CROP_CODE_SEPARATOR;

/// Import (action application) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Country prefix prepended to registry crop type codes ("nl" → "nl_265").
    pub crop_code_prefix: String,
    /// Acquisition method recorded on fields created or updated from the registry.
    pub acquiring_method: String,
    /// Name prefix for imported fields whose registry designator is empty.
    pub fallback_name_prefix: String,
}

impl ImportConfig {
    /// Catalogue code for a registry crop type code, e.g. `265` → `nl_265`.
    pub fn catalogue_code(&self, crop_type_code: &str) -> String {
        format!("{}{}{}", self.crop_code_prefix, CROP_CODE_SEPARATOR, crop_type_code)
    }

    /// Generated name for an imported field without a designator.
    pub fn fallback_name(&self, crop_field_id: &str) -> String {
        format!("{} {}", self.fallback_name_prefix, crop_field_id)
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            crop_code_prefix: defaults::DEFAULT_CROP_CODE_PREFIX.to_string(),
            acquiring_method: defaults::DEFAULT_ACQUIRING_METHOD.to_string(),
            fallback_name_prefix: defaults::DEFAULT_FALLBACK_NAME_PREFIX.to_string(),
        }
    }
}
