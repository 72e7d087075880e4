//! Persistence errors raised by `IFieldStore` implementations.

use super::error_code::{self, FieldSyncErrorCode};

/// Errors surfaced by the persistence collaborator. The action processor
/// never catches these; they abort the remaining batch.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("field not found: {field_id}")]
    FieldNotFound { field_id: String },

    #[error("cultivation not found: {cultivation_id}")]
    CultivationNotFound { cultivation_id: String },

    #[error("{operation} failed: {reason}")]
    WriteFailed { operation: String, reason: String },

    #[error("persistence unavailable: {reason}")]
    Unavailable { reason: String },
}

impl FieldSyncErrorCode for PersistenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldNotFound { .. } | Self::CultivationNotFound { .. } => error_code::NOT_FOUND,
            _ => error_code::PERSISTENCE_ERROR,
        }
    }
}
