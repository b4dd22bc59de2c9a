use std::io;
use tracing::Level;
use tracing_subscriber::fmt;

/// Install the stderr subscriber. stdout is left to the report.
pub fn init_logging() {
    fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
