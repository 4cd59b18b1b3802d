pub mod feed;
pub mod subgraph;

use async_trait::async_trait;

use crate::models::{Amm, VaultPool, VaultStat};

#[async_trait]
pub trait VaultFeed: Send + Sync {
    fn name(&self) -> &'static str;
    /// Full vault list for this cycle. Failure here is fatal to the cycle.
    async fn fetch_vaults(&self) -> Result<Vec<VaultStat>, SourceError>;
}

#[async_trait]
pub trait PoolSource: Send + Sync {
    fn name(&self) -> &'static str;
    /// Pool metadata for one vault. Infallible by contract: a failed query
    /// comes back as `PoolLookup::Degraded`, never as an error.
    async fn fetch_pool(&self, endpoint: &str, vault_id: &str, amm: Amm) -> PoolLookup;
}

/// Outcome of a single pool query. `Degraded` carries the sentinel record so
/// one bad vault cannot fail the whole batch.
#[derive(Debug)]
pub enum PoolLookup {
    Fetched(VaultPool),
    Degraded(VaultPool),
}

impl PoolLookup {
    pub fn is_degraded(&self) -> bool {
        matches!(self, PoolLookup::Degraded(_))
    }

    pub fn into_pool(self) -> VaultPool {
        match self {
            PoolLookup::Fetched(pool) | PoolLookup::Degraded(pool) => pool,
        }
    }
}

#[derive(Debug)]
pub enum SourceError {
    Network(String),
    Parse(String),
    Config(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Network(e) => write!(f, "Network error: {}", e),
            SourceError::Parse(e) => write!(f, "Parse error: {}", e),
            SourceError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for SourceError {}
