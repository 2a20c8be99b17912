use alias_shortener::{config, server, telemetry};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init(&config)?;

    info!(
        env = config.env.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "starting alias-shortener"
    );
    debug!("debug messages are enabled");
    config.print_summary();

    server::run(config).await
}
