/// fieldsync version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Month of the mid-season reference date used to resolve the active cultivation.
pub const REFERENCE_MONTH: u32 = 5;

/// Day of the mid-season reference date used to resolve the active cultivation.
pub const REFERENCE_DAY: u32 = 15;

/// Stable review item id used when neither side carries an identifier.
pub const UNKNOWN_ITEM_ID: &str = "unknown";

/// Separator between the country prefix and the registry crop type code.
pub const CROP_CODE_SEPARATOR: char = '_';

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "FIELDSYNC_LOG";
