//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the fieldsync tracing/logging system.
///
/// Reads the `FIELDSYNC_LOG` environment variable for per-crate log levels.
/// Format: `FIELDSYNC_LOG=fieldsync_matching=debug,fieldsync_geometry=warn`
///
/// Falls back to `default_level` (typically `observability.log_level`) if
/// `FIELDSYNC_LOG` is not set or is invalid, and to `info` if that is invalid too.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // A subscriber installed by the host application wins.
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init()
            .is_ok();
        tracing::debug!(version = VERSION, installed, "fieldsync tracing initialized");
    });
}
