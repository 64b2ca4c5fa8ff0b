// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only messages and the report.
/// `RUST_LOG` selects the level; engine `log` records are captured too.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
