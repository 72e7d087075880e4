use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The operator's resolution for one review item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    AddRemote,
    UpdateFromRemote,
    KeepLocal,
    RemoveLocal,
    CloseLocal,
    Ignore,
    NoAction,
}

impl UserAction {
    /// Actions that never touch persistence.
    pub fn is_noop(&self) -> bool {
        matches!(self, UserAction::Ignore | UserAction::NoAction)
    }
}

/// Review item id → chosen action.
pub type UserChoiceMap = HashMap<String, UserAction>;
