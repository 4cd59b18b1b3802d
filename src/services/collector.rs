use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;

use super::{derive_symbol, VaultFilter};
use crate::config::Config;
use crate::models::{chain_name, VaultStat, YieldPool};
use crate::sources::feed::HttpVaultFeed;
use crate::sources::subgraph::SubgraphSource;
use crate::sources::{PoolSource, SourceError, VaultFeed};
use crate::utils::format_chain;
use crate::PROJECT;

/// One-cycle orchestrator: fetch the APY feed, drop excluded vaults, enrich
/// the rest from their subgraphs in parallel, emit normalized records in
/// feed order.
pub struct YieldCollector {
    config: Arc<Config>,
    feed: Arc<dyn VaultFeed>,
    pools: Arc<dyn PoolSource>,
    filter: VaultFilter,
    semaphore: Arc<Semaphore>,
}

impl YieldCollector {
    pub fn new(config: Arc<Config>) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let feed = Arc::new(HttpVaultFeed::new(config.feed_url.clone(), timeout));
        let pools = Arc::new(SubgraphSource::new(timeout));
        Self::with_sources(config, feed, pools)
    }

    /// Wire in alternative sources. Collector tests stub both seams.
    pub fn with_sources(
        config: Arc<Config>,
        feed: Arc<dyn VaultFeed>,
        pools: Arc<dyn PoolSource>,
    ) -> Self {
        let filter = VaultFilter::new(&config.excluded_vaults);
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_queries));
        Self {
            config,
            feed,
            pools,
            filter,
            semaphore,
        }
    }

    pub async fn collect(&self) -> Result<Vec<YieldPool>, SourceError> {
        let vaults = self.feed.fetch_vaults().await?;
        tracing::info!("{}: fetched {} vault(s)", self.feed.name(), vaults.len());

        let vaults = self.filter.apply(vaults);

        // Resolve endpoints and chain slugs before fanning out: a registry
        // gap fails the cycle here instead of mid-flight.
        let mut jobs = Vec::with_capacity(vaults.len());
        for vault in vaults {
            let endpoint = self
                .config
                .subgraph_for(vault.amm, vault.chain_id)?
                .to_string();
            let Some(chain) = chain_name(vault.chain_id) else {
                tracing::warn!(
                    "no chain name for id {}, skipping vault {}",
                    vault.chain_id,
                    vault.vault
                );
                continue;
            };
            jobs.push((vault, endpoint, chain));
        }

        let results = join_all(
            jobs.into_iter()
                .map(|(vault, endpoint, chain)| self.enrich(vault, endpoint, chain)),
        )
        .await;

        let degraded = results.iter().filter(|(_, degraded)| *degraded).count();
        let records: Vec<YieldPool> = results.into_iter().map(|(record, _)| record).collect();
        tracing::info!(
            "cycle complete: {} pool(s), {} degraded",
            records.len(),
            degraded
        );
        Ok(records)
    }

    async fn enrich(
        &self,
        vault: VaultStat,
        endpoint: String,
        chain: &'static str,
    ) -> (YieldPool, bool) {
        let _permit = self.semaphore.acquire().await.unwrap();

        let lookup = self
            .pools
            .fetch_pool(&endpoint, &vault.vault, vault.amm)
            .await;
        let degraded = lookup.is_degraded();
        let pool = lookup.into_pool();

        let chain_label = format_chain(chain);
        let record = YieldPool {
            pool: format!("{}-{}", pool.id, chain_label).to_lowercase(),
            chain: chain_label,
            project: PROJECT.to_string(),
            symbol: derive_symbol(&pool.name),
            tvl_usd: vault.current_notional,
            apy_base: vault.apr.unwrap_or(0.0),
            url: format!("{}amm/{}/{}", self.config.app_url, vault.amm, vault.vault),
            underlying_tokens: pool.underlying_tokens(),
        };
        (record, degraded)
    }
}
