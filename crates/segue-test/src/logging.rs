//! Logging for test runs
//!
//! The library crates only emit `tracing` events. Tests that want to see
//! them call [`init_tracing`]; the filter is read from `SEGUE_LOG` and
//! defaults to `warn`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SEGUE_LOG";

static INIT: Once = Once::new();

/// Install a test-friendly `fmt` subscriber once per process
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        // another subscriber may already be installed by the test binary
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::warn!("logging initialised");
    }
}
