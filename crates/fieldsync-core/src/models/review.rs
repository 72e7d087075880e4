//! Review items: the classified output of one matching pass.

use serde::{Deserialize, Serialize};

use super::field::{Cultivation, LocalField};
use super::remote::RemoteField;
use crate::constants::UNKNOWN_ITEM_ID;

/// Classification of a review item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Match,
    Conflict,
    NewRemote,
    NewLocal,
    ExpiredLocal,
}

/// A differing attribute of a matched local/remote pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldDiff {
    #[serde(rename = "b_name")]
    Name,
    #[serde(rename = "b_geometry")]
    Geometry,
    #[serde(rename = "b_start")]
    Start,
    #[serde(rename = "b_end")]
    End,
    #[serde(rename = "b_lu_catalogue")]
    CropCode,
}

impl FieldDiff {
    /// The attribute key as exposed to the presentation layer.
    pub fn key(&self) -> &'static str {
        match self {
            FieldDiff::Name => "b_name",
            FieldDiff::Geometry => "b_geometry",
            FieldDiff::Start => "b_start",
            FieldDiff::End => "b_end",
            FieldDiff::CropCode => "b_lu_catalogue",
        }
    }
}

/// Display summary of a resolved cultivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultivationSummary {
    /// Instance id; only local cultivations have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_lu: Option<String>,
    pub b_lu_catalogue: String,
    pub b_lu_name: String,
}

impl From<&Cultivation> for CultivationSummary {
    fn from(cultivation: &Cultivation) -> Self {
        Self {
            b_lu: Some(cultivation.b_lu.clone()),
            b_lu_catalogue: cultivation.b_lu_catalogue.clone(),
            b_lu_name: cultivation.b_lu_name.clone(),
        }
    }
}

/// A local field paired with a registry field, with their differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub local_field: LocalField,
    pub rvo_field: RemoteField,
    pub local_cultivation: Option<CultivationSummary>,
    pub rvo_cultivation: Option<CultivationSummary>,
    pub diffs: Vec<FieldDiff>,
}

/// A registry field with no local counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOnly {
    pub rvo_field: RemoteField,
    pub rvo_cultivation: Option<CultivationSummary>,
}

/// A local field with no registry counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalOnly {
    pub local_field: LocalField,
    pub local_cultivation: Option<CultivationSummary>,
}

/// One unit of reconciliation output.
///
/// Each status carries exactly the payload it needs: a `NewRemote` item
/// cannot hold a local field, and `Match` never carries diffs (build paired
/// items through [`ReviewItem::compared`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewItem {
    Match(MatchedPair),
    Conflict(MatchedPair),
    NewRemote(RemoteOnly),
    NewLocal(LocalOnly),
    ExpiredLocal(LocalOnly),
}

impl ReviewItem {
    /// `Conflict` when the pair has diffs, `Match` otherwise.
    pub fn compared(pair: MatchedPair) -> Self {
        if pair.diffs.is_empty() {
            ReviewItem::Match(pair)
        } else {
            ReviewItem::Conflict(pair)
        }
    }

    pub fn status(&self) -> ReviewStatus {
        match self {
            ReviewItem::Match(_) => ReviewStatus::Match,
            ReviewItem::Conflict(_) => ReviewStatus::Conflict,
            ReviewItem::NewRemote(_) => ReviewStatus::NewRemote,
            ReviewItem::NewLocal(_) => ReviewStatus::NewLocal,
            ReviewItem::ExpiredLocal(_) => ReviewStatus::ExpiredLocal,
        }
    }

    pub fn local_field(&self) -> Option<&LocalField> {
        match self {
            ReviewItem::Match(pair) | ReviewItem::Conflict(pair) => Some(&pair.local_field),
            ReviewItem::NewLocal(local) | ReviewItem::ExpiredLocal(local) => {
                Some(&local.local_field)
            }
            ReviewItem::NewRemote(_) => None,
        }
    }

    pub fn remote_field(&self) -> Option<&RemoteField> {
        match self {
            ReviewItem::Match(pair) | ReviewItem::Conflict(pair) => Some(&pair.rvo_field),
            ReviewItem::NewRemote(remote) => Some(&remote.rvo_field),
            ReviewItem::NewLocal(_) | ReviewItem::ExpiredLocal(_) => None,
        }
    }

    pub fn local_cultivation(&self) -> Option<&CultivationSummary> {
        match self {
            ReviewItem::Match(pair) | ReviewItem::Conflict(pair) => pair.local_cultivation.as_ref(),
            ReviewItem::NewLocal(local) | ReviewItem::ExpiredLocal(local) => {
                local.local_cultivation.as_ref()
            }
            ReviewItem::NewRemote(_) => None,
        }
    }

    pub fn remote_cultivation(&self) -> Option<&CultivationSummary> {
        match self {
            ReviewItem::Match(pair) | ReviewItem::Conflict(pair) => pair.rvo_cultivation.as_ref(),
            ReviewItem::NewRemote(remote) => remote.rvo_cultivation.as_ref(),
            ReviewItem::NewLocal(_) | ReviewItem::ExpiredLocal(_) => None,
        }
    }

    /// Differing attributes; empty for everything but `Conflict`.
    pub fn diffs(&self) -> &[FieldDiff] {
        match self {
            ReviewItem::Conflict(pair) => &pair.diffs,
            _ => &[],
        }
    }

    /// Stable id used to look up the operator's choice: the local `b_id`,
    /// else the registry `CropFieldID`, else `"unknown"`.
    pub fn item_id(&self) -> &str {
        self.local_field()
            .map(|local| local.b_id.as_str())
            .filter(|id| !id.is_empty())
            .or_else(|| {
                self.remote_field()
                    .map(|remote| remote.crop_field_id.as_str())
                    .filter(|id| !id.is_empty())
            })
            .unwrap_or(UNKNOWN_ITEM_ID)
    }
}

/// Per-status counts of a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub matched: usize,
    pub conflicts: usize,
    pub new_remote: usize,
    pub new_local: usize,
    pub expired_local: usize,
}

impl ReviewSummary {
    pub fn from_items(items: &[ReviewItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            match item.status() {
                ReviewStatus::Match => summary.matched += 1,
                ReviewStatus::Conflict => summary.conflicts += 1,
                ReviewStatus::NewRemote => summary.new_remote += 1,
                ReviewStatus::NewLocal => summary.new_local += 1,
                ReviewStatus::ExpiredLocal => summary.expired_local += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.matched + self.conflicts + self.new_remote + self.new_local + self.expired_local
    }
}
