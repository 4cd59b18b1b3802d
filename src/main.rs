use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use range_yield_adaptor::config::Config;
use range_yield_adaptor::services::YieldCollector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,range_yield_adaptor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("✓ Configuration loaded");

    let collector = YieldCollector::new(Arc::new(config));
    let pools = collector.collect().await?;

    println!("{}", serde_json::to_string_pretty(&pools)?);

    Ok(())
}
