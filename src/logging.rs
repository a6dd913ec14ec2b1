//! Diagnostic logging setup
//!
//! Log output goes to stderr so it never mixes with command output. The
//! filter comes from `RUST_LOG`; without it only warnings are shown.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "finflow=warn";

/// Initializes the global tracing subscriber.
///
/// `verbose` raises the default level to `debug`; an explicit `RUST_LOG`
/// always wins. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default = if verbose { "finflow=debug" } else { DEFAULT_FILTER };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        // Another subscriber may already be installed (e.g. by an embedding test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still works after repeated init");
    }
}
