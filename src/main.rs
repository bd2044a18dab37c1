use anyhow::Result;
use dotenvy::dotenv;
use streamflix::config::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv();
    init_tracing();
    match dotenv_result {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    let config = Config::from_env()?;
    info!("All required environment variables are set");
    streamflix::app::run_server(config).await
}
