use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the cultivation catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultivationCatalogueEntry {
    pub b_lu_catalogue: String,
    pub b_lu_name: String,
}

/// Crop code → crop name lookup.
#[derive(Debug, Clone, Default)]
pub struct CultivationCatalogue {
    names: HashMap<String, String>,
}

impl CultivationCatalogue {
    /// Build from catalogue rows. A later row for the same code wins.
    pub fn new(entries: impl IntoIterator<Item = CultivationCatalogueEntry>) -> Self {
        let names = entries
            .into_iter()
            .map(|entry| (entry.b_lu_catalogue, entry.b_lu_name))
            .collect();
        Self { names }
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<CultivationCatalogueEntry> for CultivationCatalogue {
    fn from_iter<I: IntoIterator<Item = CultivationCatalogueEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}
