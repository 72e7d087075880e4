//! Observability for fieldsync.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
