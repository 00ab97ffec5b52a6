use campaigns::{config::AppConfig, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter from `RUST_LOG`, defaulting to `info` when unset or unparsable.
fn log_filter(lookup: impl Fn(&str) -> Option<String>) -> EnvFilter {
    lookup("RUST_LOG")
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` must be loaded before the subscriber reads RUST_LOG.
    dotenvy::dotenv().ok();
    init_logging(log_filter(|key| std::env::var(key).ok()));

    let config = AppConfig::from_env();

    tracing::info!(
        port = config.port,
        frontend_url = config.frontend_url.as_deref().unwrap_or("-"),
        "Starting campaign API"
    );

    run_server(config).await
}
