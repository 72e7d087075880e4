//! Configuration system for fieldsync.
//! TOML-based, resolution: env > config file > compiled defaults.

pub mod defaults;
pub mod fieldsync_config;
pub mod import_config;
pub mod matching_config;
pub mod observability_config;

pub use fieldsync_config::FieldSyncConfig;
pub use import_config::ImportConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
