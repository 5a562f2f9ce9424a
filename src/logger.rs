use tracing_subscriber::{EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(layer().with_target(false))
        .init();
}

/// Test variant: debug level, test writer, tolerates repeat initialization
/// across tests in one process.
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(layer().with_target(false).with_test_writer())
        .try_init();
}
