//! FieldSyncErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured code string
/// for callers that map errors onto their own surface (HTTP, UI, logs).
pub trait FieldSyncErrorCode {
    /// Returns the error code string (e.g., "GEOMETRY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GEOMETRY_ERROR: &str = "GEOMETRY_ERROR";
pub const UNSUPPORTED_GEOMETRY: &str = "UNSUPPORTED_GEOMETRY";
pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const INVALID_YEAR: &str = "INVALID_YEAR";
