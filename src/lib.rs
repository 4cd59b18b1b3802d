pub mod config;
pub mod models;
pub mod services;
pub mod sources;
pub mod utils;

use std::sync::Arc;

use config::Config;
use models::YieldPool;
use services::YieldCollector;
use sources::SourceError;

/// Project identifier stamped on every output record.
pub const PROJECT: &str = "range-protocol";

/// Web UI base; vault deep links hang off it.
pub const PROJECT_URL: &str = "https://app.rangeprotocol.com/";

/// This adaptor reports current state only; no historical backfill.
pub const TIMETRAVEL: bool = false;

/// Run one collect cycle and return the normalized yield-pool records.
pub async fn apy(config: Config) -> Result<Vec<YieldPool>, SourceError> {
    YieldCollector::new(Arc::new(config)).collect().await
}
