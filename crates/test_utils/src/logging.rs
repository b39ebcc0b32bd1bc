//! Tracing setup for tests

use once_cell::sync::Lazy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("money_kernel=debug"));

    // Another harness may have installed a subscriber already.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
});

/// Installs a test-friendly tracing subscriber once per test binary
///
/// Honours `RUST_LOG`; defaults to `money_kernel=debug`.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
