//! Golden scenarios for fieldsync, deserialized into the core models.
//!
//! Scenarios live under `golden/<kind>/<name>.json` in this crate. A matching
//! scenario holds the inputs of one matching pass and the expected review
//! items. An action scenario holds review items, operator choices and the
//! store calls they should produce.

use std::path::PathBuf;

use fieldsync_core::calendar::ReviewYear;
use fieldsync_core::models::{
    CultivationCatalogue, CultivationCatalogueEntry, FieldDiff, LocalField, RemoteField,
    ReviewItem, ReviewStatus, UserChoiceMap,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const MATCHING: &str = "matching";
pub const ACTIONS: &str = "actions";

/// Inputs and expected output of one matching pass.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingScenario {
    pub description: String,
    pub year: ReviewYear,
    #[serde(default)]
    pub catalogue: Vec<CultivationCatalogueEntry>,
    pub local_fields: Vec<LocalField>,
    pub remote_fields: Vec<RemoteField>,
    pub expected: Vec<ExpectedItem>,
}

impl MatchingScenario {
    pub fn catalogue(&self) -> CultivationCatalogue {
        self.catalogue.iter().cloned().collect()
    }
}

/// One expected review item, in output order.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedItem {
    pub status: ReviewStatus,
    pub item_id: String,
    pub remote_id: Option<String>,
    #[serde(default)]
    pub diffs: Vec<FieldDiff>,
    /// Resolved registry crop name; only checked on `NEW_REMOTE` items.
    #[serde(default)]
    pub rvo_cultivation_name: Option<String>,
}

/// Choices applied to review items, and the store calls they render to.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionScenario {
    pub description: String,
    pub farm_id: String,
    pub year: ReviewYear,
    pub items: Vec<ReviewItem>,
    pub choices: UserChoiceMap,
    pub expected_calls: Vec<String>,
}

fn golden_dir(kind: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("golden")
        .join(kind)
}

/// Load `golden/<kind>/<name>.json` as `T`.
///
/// # Panics
/// Panics if the file is missing or does not deserialize as `T`.
pub fn load_golden<T: DeserializeOwned>(kind: &str, name: &str) -> T {
    let path = golden_dir(kind).join(format!("{name}.json"));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse golden file {}: {}", path.display(), e))
}

pub fn matching_scenario(name: &str) -> MatchingScenario {
    load_golden(MATCHING, name)
}

pub fn action_scenario(name: &str) -> ActionScenario {
    load_golden(ACTIONS, name)
}

/// Sorted scenario names of one kind, without the `.json` extension.
pub fn golden_names(kind: &str) -> Vec<String> {
    let dir = golden_dir(kind);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension()? != "json" {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_string())
        })
        .collect();
    names.sort();
    names
}
