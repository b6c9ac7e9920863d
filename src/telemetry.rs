//! Opt-in tracing setup for hosts embedding the viewer.
//!
//! The library only emits `tracing` events; hosts either call
//! [`init_default_tracing`] or install their own subscriber.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "apm_viz=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
