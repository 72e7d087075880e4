//! Top-level error aggregating the subsystem errors.

use super::error_code::{self, FieldSyncErrorCode};
use super::{ConfigError, GeometryError, PersistenceError};

/// Errors that can cross a crate boundary in fieldsync.
#[derive(Debug, thiserror::Error)]
pub enum FieldSyncError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("year {year} has no representable review dates")]
    InvalidYear { year: i32 },
}

impl FieldSyncErrorCode for FieldSyncError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Geometry(e) => e.error_code(),
            Self::Persistence(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::InvalidYear { .. } => error_code::INVALID_YEAR,
        }
    }
}

/// Result alias used across the workspace.
pub type FieldSyncResult<T> = Result<T, FieldSyncError>;
