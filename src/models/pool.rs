use serde::{Deserialize, Serialize};

/// Vault entity as the AMM subgraphs return it. Numeric fields arrive as
/// strings (GraphQL BigInt/BigDecimal) and are passed through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaultPool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub liquidity: Option<String>,
    #[serde(default)]
    pub balance0: Option<String>,
    #[serde(default)]
    pub balance1: Option<String>,
    #[serde(default, rename = "totalSupply")]
    pub total_supply: Option<String>,
    #[serde(default, rename = "totalFeesEarned0")]
    pub total_fees_earned0: Option<String>,
    #[serde(default, rename = "totalFeesEarned1")]
    pub total_fees_earned1: Option<String>,
    #[serde(default)]
    pub token0: Option<String>,
    #[serde(default)]
    pub token1: Option<String>,
    #[serde(default, rename = "tokenX")]
    pub token_x: Option<String>,
    #[serde(default, rename = "tokenY")]
    pub token_y: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
}

impl VaultPool {
    /// Stand-in for a failed lookup. The name still splits into two token
    /// fragments so symbol derivation stays total.
    pub fn degraded() -> Self {
        Self {
            id: "Error in getPool()".to_string(),
            name: "failed/failed".to_string(),
            ..Self::default()
        }
    }

    /// Ordered token pair: token0/token1 when the schema has them, the
    /// izumi-style tokenX/tokenY otherwise.
    pub fn underlying_tokens(&self) -> [Option<String>; 2] {
        if self.token0.is_some() {
            [self.token0.clone(), self.token1.clone()]
        } else {
            [self.token_x.clone(), self.token_y.clone()]
        }
    }
}

/// Normalized record handed to the downstream yield aggregator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPool {
    pub pool: String,
    pub chain: String,
    pub project: String,
    pub symbol: String,
    pub tvl_usd: f64,
    pub apy_base: f64,
    pub url: String,
    pub underlying_tokens: [Option<String>; 2],
}
