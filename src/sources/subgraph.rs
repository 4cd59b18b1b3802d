use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{PoolLookup, PoolSource, SourceError};
use crate::models::{Amm, VaultPool};

/// GraphQL client for the per-AMM vault subgraphs. Degrades instead of
/// failing: the collector must always get one record back per vault.
pub struct SubgraphSource {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GraphResponse {
    #[serde(default)]
    data: Option<GraphData>,
}

#[derive(Debug, Deserialize)]
struct GraphData {
    #[serde(default)]
    vault: Option<VaultPool>,
}

impl SubgraphSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder().timeout(timeout).build().unwrap(),
        }
    }

    fn build_query(vault_id: &str, amm: Amm) -> String {
        let (token_a, token_b) = amm.token_fields();
        format!(
            r#"{{
  vault(id: "{vault_id}") {{
    id
    liquidity
    balance0
    balance1
    totalSupply
    totalFeesEarned0
    totalFeesEarned1
    {token_a}
    {token_b}
    name
    tag
    pool
  }}
}}"#
        )
    }

    async fn try_fetch(
        &self,
        endpoint: &str,
        vault_id: &str,
        amm: Amm,
    ) -> Result<VaultPool, SourceError> {
        let body = serde_json::json!({ "query": Self::build_query(vault_id, amm) });

        let resp = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Network(format!(
                "subgraph returned {}",
                resp.status()
            )));
        }

        let parsed: GraphResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        parsed
            .data
            .and_then(|d| d.vault)
            .ok_or_else(|| SourceError::Parse("no vault in subgraph response".to_string()))
    }
}

#[async_trait]
impl PoolSource for SubgraphSource {
    fn name(&self) -> &'static str {
        "subgraph"
    }

    async fn fetch_pool(&self, endpoint: &str, vault_id: &str, amm: Amm) -> PoolLookup {
        match self.try_fetch(endpoint, vault_id, amm).await {
            Ok(pool) => PoolLookup::Fetched(pool),
            Err(e) => {
                tracing::warn!("pool request failed for {}: {}", vault_id, e);
                PoolLookup::Degraded(VaultPool::degraded())
            }
        }
    }
}
