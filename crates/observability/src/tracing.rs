//! Tracing/logging initialization.
//!
//! Output goes to stderr; stdout is left to the program's own output.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = ObservabilityConfig::default();
        init(&config);
        init(&config);
        ::tracing::info!("still logging after second init");
    }

    #[test]
    fn malformed_filter_does_not_panic() {
        let config = ObservabilityConfig {
            filter: "[[not a directive".to_string(),
            format: LogFormat::Pretty,
        };
        init(&config);
    }
}
