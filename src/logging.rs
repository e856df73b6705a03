use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global console subscriber. `RUST_LOG`, when set, overrides
/// the level picked on the command line.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
