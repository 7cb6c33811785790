//! Telemetry helpers for hosts embedding `perf-chart`.
//!
//! Tracing setup stays opt-in. Hosts either call `init_default_tracing` or
//! install their own `tracing` subscriber.
//!
//! Events emitted by the crate:
//! - `warn`: `ChartInitializer::on_document_ready` called again after it fired.
//! - `debug`: chart lifecycle on a canvas, a page without the target element,
//!   and PNG output from the Cairo backend.
//! - `trace`: per-frame primitive counts and tick step from the bar layout,
//!   and skipped resizes.
//!
//! Run with `RUST_LOG=perf_chart=trace` to see all of them.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
