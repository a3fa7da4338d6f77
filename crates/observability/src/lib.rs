//! Tracing and logging (shared setup).

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::ObservabilityConfig::from_env());
}

/// Environment-driven settings.
pub mod config;

/// Subscriber installation (filters, output format).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
