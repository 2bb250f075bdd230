//! Tracing setup for drivers and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Call once at startup; later calls are no-ops. Does nothing unless
/// `RUST_LOG` is set, e.g. `RUST_LOG=tymo_types=debug` to see unresolved
/// super-types and replaced registrations, or `RUST_LOG=tymo_types=trace`
/// for per-walk spans.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A driver may already have installed its own subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
