//! Logging setup.
//!
//! Frames go to stdout, so log lines are written to stderr. Filtering follows
//! `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
