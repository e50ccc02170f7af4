use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) const DEFAULT_LEVEL: Level = Level::INFO;

/// Installs a human-readable logger on stderr, keeping stdout free for the result.
pub(crate) fn init_logger(level: Level) {
    let logger = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(logger)
        .with(LevelFilter::from_level(level))
        .init();
}
