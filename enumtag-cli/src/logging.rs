//! Diagnostic logging setup.
//!
//! The subscriber is only installed when `ENUMTAG_LOG` (or `RUST_LOG`) is
//! set. Values use `RUST_LOG` syntax, e.g. `debug` or `enumtag=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENUMTAG_LOG";

/// Build an `EnvFilter` from `ENUMTAG_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Install the global tracing subscriber, writing to stderr.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
