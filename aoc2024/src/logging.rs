//! Diagnostics for the solvers, controlled through `RUST_LOG`.
//!
//! Puzzle answers go to stdout; everything emitted here goes to stderr so the
//! answers stay pipeable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset: solve timings from this crate, warnings
/// from everything else.
const DEFAULT_FILTER: &str = "warn,aoc2024=info";

/// Install the global subscriber.
///
/// ```bash
/// RUST_LOG=aoc2024=debug aoc2024 run day03
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time().compact())
        .init();
}
