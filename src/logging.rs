// ============================================================================
// Logging
// Subscriber setup for binaries and demos that want to see vector diagnostics
// ============================================================================

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,decimal_vectors=debug";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns an error instead of panicking if a global subscriber is already
/// installed, so tests and demos can call it more than once.
pub fn init() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    tracing::debug!(filter = DEFAULT_FILTER, "logging initialized");
    Ok(())
}
