//! Error handling for fieldsync.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod fieldsync_error;
pub mod geometry_error;
pub mod persistence_error;

pub use config_error::ConfigError;
pub use error_code::FieldSyncErrorCode;
pub use fieldsync_error::{FieldSyncError, FieldSyncResult};
pub use geometry_error::GeometryError;
pub use persistence_error::PersistenceError;
