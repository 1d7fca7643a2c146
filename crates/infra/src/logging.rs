//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level.

use devicedata_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which is the
/// normal case in tests.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = build_filter(&config.level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().with_current_span(false).try_init().is_ok()
    } else {
        builder.with_target(true).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    }
    installed
}

/// Initialize logging for tests (captured test output)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}
