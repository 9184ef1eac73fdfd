use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ENV_LOG;

/// Initialize tracing with file output.
///
/// Disabled unless `YQ_LOG` names a file: stdout and stderr belong to the
/// wrapped tool. Events are appended, so repeated invocations share a log.
/// Filtering comes from `RUST_LOG`, default `yq=debug`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(ENV_LOG).filter(|p| !p.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yq=debug"));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to open log file {}: {}",
                log_path.to_string_lossy(),
                e
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
