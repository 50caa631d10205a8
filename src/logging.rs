//! Logging setup.
//!
//! Log output goes through `tracing-subscriber`'s formatter. The level
//! filter is read from `RUST_LOG` and defaults to `info`, for example
//! `RUST_LOG=dock_booking_engine=debug`.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber for the service binary.
///
/// # Examples
///
/// ```no_run
/// use dock_booking_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Installs a debug-level subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
