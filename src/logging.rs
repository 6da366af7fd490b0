use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Later calls are no-ops.
pub fn init_tracing() {
    INITIALISED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr);
        // another subscriber may already be installed by an embedding process
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
