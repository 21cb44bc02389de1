//! Logging setup.
//!
//! Logs go to stderr so they never mix with the calculator display on stdout.
//! `RUST_LOG` takes precedence over the `[logging]` config section:
//!
//! ```bash
//! RUST_LOG=zcalc=debug zcalc eval "2+2="
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize the global subscriber. Only the first call has any effect.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.filter_directives())
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}
