use std::fmt;

use serde::{Deserialize, Serialize};

pub const CHAIN_ID_ETH: u32 = 1;
pub const CHAIN_ID_POLYGON: u32 = 137;
pub const CHAIN_ID_BSC: u32 = 56;
pub const CHAIN_ID_ARBITRUM: u32 = 42161;
pub const CHAIN_ID_MANTLE: u32 = 5000;
pub const CHAIN_ID_BASE: u32 = 8453;

/// Chain id -> lowercase slug. Unknown ids resolve to `None`; callers skip
/// those vaults instead of erroring.
pub fn chain_name(chain_id: u32) -> Option<&'static str> {
    match chain_id {
        CHAIN_ID_ETH => Some("ethereum"),
        CHAIN_ID_POLYGON => Some("polygon"),
        CHAIN_ID_BSC => Some("bsc"),
        CHAIN_ID_ARBITRUM => Some("arbitrum"),
        CHAIN_ID_MANTLE => Some("mantle"),
        CHAIN_ID_BASE => Some("base"),
        _ => None,
    }
}

/// AMMs the protocol deploys vaults on. Wire names are lowercase, matching
/// both the APY feed and the subgraph registry keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amm {
    Uniswap,
    Pancakeswap,
    Sushiswap,
    Quickswap,
    Retro,
    Agni,
    Camelot,
    Fusionx,
    Izumi,
    Swapsicle,
}

impl Amm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Amm::Uniswap => "uniswap",
            Amm::Pancakeswap => "pancakeswap",
            Amm::Sushiswap => "sushiswap",
            Amm::Quickswap => "quickswap",
            Amm::Retro => "retro",
            Amm::Agni => "agni",
            Amm::Camelot => "camelot",
            Amm::Fusionx => "fusionx",
            Amm::Izumi => "izumi",
            Amm::Swapsicle => "swapsicle",
        }
    }

    /// GraphQL field names for the vault's token pair. Izumi's subgraph
    /// schema names them tokenX/tokenY, every other AMM uses token0/token1.
    pub fn token_fields(&self) -> (&'static str, &'static str) {
        match self {
            Amm::Izumi => ("tokenX", "tokenY"),
            _ => ("token0", "token1"),
        }
    }
}

impl fmt::Display for Amm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_name_known_ids() {
        assert_eq!(chain_name(1), Some("ethereum"));
        assert_eq!(chain_name(137), Some("polygon"));
        assert_eq!(chain_name(56), Some("bsc"));
        assert_eq!(chain_name(42161), Some("arbitrum"));
        assert_eq!(chain_name(5000), Some("mantle"));
        assert_eq!(chain_name(8453), Some("base"));
    }

    #[test]
    fn test_chain_name_unknown_id() {
        assert_eq!(chain_name(999999), None);
        assert_eq!(chain_name(0), None);
    }

    #[test]
    fn test_amm_wire_names() {
        let amm: Amm = serde_json::from_str("\"pancakeswap\"").unwrap();
        assert_eq!(amm, Amm::Pancakeswap);
        assert_eq!(amm.to_string(), "pancakeswap");

        let amm: Amm = serde_json::from_str("\"izumi\"").unwrap();
        assert_eq!(amm, Amm::Izumi);
    }

    #[test]
    fn test_unknown_amm_rejected() {
        assert!(serde_json::from_str::<Amm>("\"curve\"").is_err());
    }

    #[test]
    fn test_token_fields_per_amm() {
        assert_eq!(Amm::Izumi.token_fields(), ("tokenX", "tokenY"));
        assert_eq!(Amm::Uniswap.token_fields(), ("token0", "token1"));
        assert_eq!(Amm::Swapsicle.token_fields(), ("token0", "token1"));
    }
}
