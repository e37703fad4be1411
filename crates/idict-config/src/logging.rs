use tracing_subscriber::EnvFilter;

use crate::{IgnoredEnv, LogFormat};

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
/// Does nothing if a subscriber is already set.
pub fn init_logging(format: LogFormat, default_filter: &str) {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("tracing subscriber already initialized, skipping");
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

/// Warn about environment overrides dropped while building the config.
/// Call after `init_logging`.
pub fn report_ignored(ignored: &[IgnoredEnv]) {
    for entry in ignored {
        tracing::warn!(key = entry.key, "{entry}");
    }
}
