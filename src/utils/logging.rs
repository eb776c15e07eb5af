//! Diagnostic logging setup. User-facing output goes through
//! `ui::messages`; this only covers `tracing` events, written to stderr.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "PUNCHCLOCK_LOG";

/// Install the global subscriber. `PUNCHCLOCK_LOG` wins over `default_level`.
/// Calling it twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(format!("punchclock={default_level}"))
            .unwrap_or_else(|_| EnvFilter::new("punchclock=warn"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
