//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to a formatted
//! stderr writer, filtered by the configured level. Observability is
//! optional: initialization failures are swallowed, and calling this more
//! than once is safe (only the first call takes effect).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber for the process.
///
/// The filter directive comes from `config.trace_level` (for example
/// `"debug"` or `"persondir=trace"`), defaulting to `"info"`. Output goes to
/// stderr so it never interleaves with rendered views on stdout.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        );

    let _ = subscriber.try_init();
}
