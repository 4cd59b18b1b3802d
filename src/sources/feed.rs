use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{SourceError, VaultFeed};
use crate::models::VaultStat;

/// APY feed client. One GET per collect cycle; any failure is fatal for the
/// cycle since there is nothing to degrade to.
pub struct HttpVaultFeed {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    data: Vec<VaultStat>,
}

impl HttpVaultFeed {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder().timeout(timeout).build().unwrap(),
            url,
        }
    }
}

#[async_trait]
impl VaultFeed for HttpVaultFeed {
    fn name(&self) -> &'static str {
        "RangeAPY"
    }

    async fn fetch_vaults(&self) -> Result<Vec<VaultStat>, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Network(format!(
                "feed returned {}",
                resp.status()
            )));
        }

        let feed: FeedResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(feed.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amm;

    const FEED_BODY: &str = r#"{
        "data": [
            {
                "vault": "0xAbC0000000000000000000000000000000000001",
                "chain_id": 1,
                "amm": "uniswap",
                "current_notional": 250000.5,
                "apr": 12.3
            },
            {
                "vault": "0xDeF0000000000000000000000000000000000002",
                "chain_id": 5000,
                "amm": "izumi",
                "current_notional": 9000.0
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_vaults_parses_feed_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data/RangeAPY.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FEED_BODY)
            .create_async()
            .await;

        let feed = HttpVaultFeed::new(
            format!("{}/data/RangeAPY.json", server.url()),
            Duration::from_secs(2),
        );
        let vaults = feed.fetch_vaults().await.unwrap();

        assert_eq!(vaults.len(), 2);
        assert_eq!(vaults[0].amm, Amm::Uniswap);
        assert_eq!(vaults[0].apr, Some(12.3));
        assert_eq!(vaults[1].chain_id, 5000);
        assert_eq!(vaults[1].apr, None);
    }

    #[tokio::test]
    async fn test_fetch_vaults_non_2xx_is_fatal() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data/RangeAPY.json")
            .with_status(503)
            .create_async()
            .await;

        let feed = HttpVaultFeed::new(
            format!("{}/data/RangeAPY.json", server.url()),
            Duration::from_secs(2),
        );
        let err = feed.fetch_vaults().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_vaults_bad_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data/RangeAPY.json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let feed = HttpVaultFeed::new(
            format!("{}/data/RangeAPY.json", server.url()),
            Duration::from_secs(2),
        );
        let err = feed.fetch_vaults().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
