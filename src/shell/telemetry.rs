use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber. `RUST_LOG` wins over the `info` default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
