// Single source of truth for all default values.

// --- Matching ---
pub const DEFAULT_SPATIAL_MATCH_THRESHOLD: f64 = 0.99;
pub const DEFAULT_GEOMETRY_DIFF_THRESHOLD: f64 = 0.99;

// --- Import ---
pub const DEFAULT_CROP_CODE_PREFIX: &str = "nl";
pub const DEFAULT_ACQUIRING_METHOD: &str = "rvo_import";
pub const DEFAULT_FALLBACK_NAME_PREFIX: &str = "Perceel";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
