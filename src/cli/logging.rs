use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive for diagnostics.
pub const LOG_ENV: &str = "SRGEN_LOG";

static INIT: Once = Once::new();

/// Install the stderr diagnostics subscriber.
///
/// `SRGEN_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `--verbose`.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { Level::DEBUG } else { Level::WARN };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(format!("srgen={}", level)));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
