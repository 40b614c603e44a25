use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "SUBSCRIPTCHECK_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

static TRACING_INIT: Once = Once::new();

/// Installs the stderr subscriber once; stdout stays reserved for command output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
        if installed.is_err() {
            tracing::debug!("tracing subscriber was already installed");
        }
    });
}
